//! Output formatting for the CLI.

use console::style;

/// Output handler for CLI messages. Human messages go to stderr so that
/// rendered HTML and JSON on stdout stay clean.
#[derive(Clone)]
pub struct Output {
    verbose: bool,
    json: bool,
}

impl Output {
    pub fn new(verbose: bool, json: bool) -> Self {
        Self { verbose, json }
    }

    pub fn info(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("ℹ").blue(), msg);
    }

    pub fn success(&self, msg: &str) {
        if self.json {
            return;
        }
        eprintln!("{} {}", style("✓").green(), msg);
    }

    pub fn error(&self, msg: &str) {
        if self.json {
            eprintln!("{}", serde_json::json!({ "error": msg }));
            return;
        }
        eprintln!("{} {}", style("✗").red(), style(msg).red());
    }

    /// Only shown with `--verbose`.
    pub fn debug(&self, msg: &str) {
        if !self.verbose || self.json {
            return;
        }
        eprintln!("{} {}", style("→").dim(), style(msg).dim());
    }

    pub fn json<T: serde::Serialize>(&self, value: &T) {
        if let Ok(json) = serde_json::to_string_pretty(value) {
            println!("{}", json);
        }
    }

    pub fn table_row(&self, cols: &[&str], widths: &[usize]) {
        let formatted: Vec<String> = cols
            .iter()
            .zip(widths.iter())
            .map(|(col, width)| format!("{:width$}", col, width = width))
            .collect();
        println!("{}", formatted.join("  ").trim_end());
    }

    pub fn is_json(&self) -> bool {
        self.json
    }
}

/// Colored variant name for the check table.
pub fn variant_badge(variant: &str) -> String {
    match variant {
        "on-sale" => style(variant).magenta().to_string(),
        "new-release" => style(variant).blue().to_string(),
        _ => style(variant).dim().to_string(),
    }
}
