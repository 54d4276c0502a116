//! Shoe grid section.

use chrono::{DateTime, Utc};
use shoe_catalog::{Catalog, RecencyWindow, Variant};

use super::render_shoe_card;

/// Per-variant card counts, for logging.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GridSummary {
    pub on_sale: usize,
    pub new_release: usize,
    pub default: usize,
}

impl GridSummary {
    pub fn total(&self) -> usize {
        self.on_sale + self.new_release + self.default
    }

    fn count(&mut self, variant: Variant) {
        match variant {
            Variant::OnSale => self.on_sale += 1,
            Variant::NewRelease => self.new_release += 1,
            Variant::Default => self.default += 1,
        }
    }
}

/// Render one card per listing, in catalog order.
pub fn render_shoe_grid(
    catalog: &Catalog,
    now: DateTime<Utc>,
    window: RecencyWindow,
) -> (String, GridSummary) {
    let mut summary = GridSummary::default();

    let cards: Vec<String> = catalog
        .iter()
        .map(|listing| {
            let variant = listing.variant(now, window);
            summary.count(variant);
            render_shoe_card(listing, variant)
        })
        .collect();

    let html = format!(
        r#"<main class="catalog-main">
<section class="shoe-grid" data-section="shoe-grid">
{}
</section>
</main>
"#,
        cards.join("\n")
    );

    (html, summary)
}
