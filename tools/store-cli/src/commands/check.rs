//! Check command - validate a catalog and list card variants.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use shoe_catalog::{count_label, Variant};
use shoe_store::StoreConfig;

use super::{load_catalog, parse_now};
use crate::output::{variant_badge, Output};

#[derive(Args)]
pub struct CheckArgs {
    /// Catalog JSON file (defaults to the bundled listings)
    #[arg(long)]
    pub catalog: Option<String>,

    /// Evaluation time, RFC 3339 (defaults to now)
    #[arg(long)]
    pub now: Option<String>,
}

#[derive(Serialize)]
struct ListingReport {
    slug: String,
    name: String,
    price: String,
    sale_price: Option<String>,
    colors: String,
    variant: Variant,
}

pub fn run(args: CheckArgs, config: &StoreConfig, output: &Output) -> Result<()> {
    let catalog = load_catalog(args.catalog.as_deref(), config.currency()?)?;
    let now = parse_now(args.now.as_deref())?;
    let window = config.recency_window();

    let reports: Vec<ListingReport> = catalog
        .iter()
        .map(|listing| ListingReport {
            slug: listing.slug.to_string(),
            name: listing.name.clone(),
            price: listing.price.display(),
            sale_price: listing.sale_price.map(|p| p.display()),
            colors: count_label("Color", listing.num_of_colors),
            variant: listing.variant(now, window),
        })
        .collect();

    if output.is_json() {
        output.json(&reports);
        return Ok(());
    }

    output.info(&format!(
        "{} listings, new releases: {}",
        reports.len(),
        window.describe()
    ));

    // Variant goes last; ANSI codes would break padding.
    let widths = [24, 10, 10, 10, 0];
    output.table_row(&["SLUG", "PRICE", "SALE", "COLORS", "VARIANT"], &widths);
    for report in &reports {
        let badge = variant_badge(report.variant.as_str());
        let sale = report.sale_price.as_deref().unwrap_or("-");
        output.table_row(
            &[&report.slug, &report.price, sale, &report.colors, &badge],
            &widths,
        );
    }

    output.success("Catalog is valid");
    Ok(())
}
