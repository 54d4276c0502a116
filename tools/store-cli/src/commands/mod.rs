//! CLI command implementations.

pub mod check;
pub mod render;

pub use check::CheckArgs;
pub use render::RenderArgs;

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use shoe_catalog::{Catalog, Currency};
use shoe_store::{bundled_catalog, StoreConfig};

use crate::output::Output;

/// Config file picked up from the working directory when `--config` is absent.
const LOCAL_CONFIG: &str = "store.toml";

/// Load `--config`, else `./store.toml`, else the bundled config.
pub fn load_config(path: Option<&str>, output: &Output) -> Result<StoreConfig> {
    if let Some(path) = path {
        output.debug(&format!("Using config {}", path));
        return StoreConfig::load(path);
    }

    if Path::new(LOCAL_CONFIG).exists() {
        output.debug(&format!("Using config ./{}", LOCAL_CONFIG));
        return StoreConfig::load(LOCAL_CONFIG);
    }

    output.debug("Using bundled config");
    StoreConfig::bundled()
}

/// Load a catalog file, or the bundled listings when no path is given.
pub fn load_catalog(path: Option<&str>, currency: Currency) -> Result<Catalog> {
    match path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read catalog file: {}", path))?;
            Catalog::from_json(&json, currency)
                .with_context(|| format!("Invalid catalog file: {}", path))
        }
        None => bundled_catalog(currency).context("Invalid bundled catalog"),
    }
}

/// Evaluation time for variant classification; defaults to now.
pub fn parse_now(now: Option<&str>) -> Result<DateTime<Utc>> {
    match now {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map(|dt| dt.with_timezone(&Utc))
            .with_context(|| format!("Invalid --now timestamp (expected RFC 3339): {}", s)),
        None => Ok(Utc::now()),
    }
}
