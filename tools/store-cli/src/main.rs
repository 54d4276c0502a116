//! Store CLI - preview and check the catalog page outside of Spin.
//!
//! Commands:
//! - `store render` - Render the catalog page to a file or stdout
//! - `store check` - Validate a catalog and list each card's variant

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CheckArgs, RenderArgs};

/// Store CLI - preview and check the shoe catalog page
#[derive(Parser)]
#[command(name = "store")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path (TOML, or JSON by extension)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the catalog page as static HTML
    Render(RenderArgs),

    /// Validate a catalog and show the variant of every listing
    Check(CheckArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let output = output::Output::new(cli.verbose, cli.json);

    let result = commands::load_config(cli.config.as_deref(), &output).and_then(|config| {
        match cli.command {
            Commands::Render(args) => commands::render::run(args, &config, &output),
            Commands::Check(args) => commands::check::run(args, &config, &output),
        }
    });

    if let Err(e) = result {
        output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
