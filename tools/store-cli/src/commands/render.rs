//! Render command - write the catalog page as static HTML.

use anyhow::{Context, Result};
use clap::Args;
use shoe_store::{CatalogPage, StoreConfig};

use super::{load_catalog, parse_now};
use crate::output::Output;

#[derive(Args)]
pub struct RenderArgs {
    /// Catalog JSON file (defaults to the bundled listings)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Output file (defaults to stdout)
    #[arg(short, long)]
    pub out: Option<String>,

    /// Evaluation time, RFC 3339 (defaults to now)
    #[arg(long)]
    pub now: Option<String>,
}

pub fn run(args: RenderArgs, config: &StoreConfig, output: &Output) -> Result<()> {
    let currency = config.currency()?;
    let catalog = load_catalog(args.catalog.as_deref(), currency)?;
    let now = parse_now(args.now.as_deref())?;

    output.debug(&format!(
        "Rendering {} listings at {} ({})",
        catalog.len(),
        now.to_rfc3339(),
        config.recency_window().describe()
    ));

    let page = CatalogPage::render(&catalog, config, now);
    let html = page.to_html();
    let summary = page.summary();

    match &args.out {
        Some(path) => {
            std::fs::write(path, &html)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            if output.is_json() {
                output.json(&serde_json::json!({
                    "out": path,
                    "bytes": html.len(),
                    "cards": summary.total(),
                    "on_sale": summary.on_sale,
                    "new_release": summary.new_release,
                    "default": summary.default,
                }));
            } else {
                output.success(&format!(
                    "Wrote {} ({} cards, {} bytes)",
                    path,
                    summary.total(),
                    html.len()
                ));
            }
        }
        None => print!("{}", html),
    }

    Ok(())
}
