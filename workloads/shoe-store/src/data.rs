//! Catalog data bundled with the component.

use shoe_catalog::{Catalog, CatalogError, Currency};

/// Listing records served by the page.
pub const BUNDLED_CATALOG: &str = include_str!("../data/shoes.json");

/// Parse and validate the bundled listings.
pub fn bundled_catalog(currency: Currency) -> Result<Catalog, CatalogError> {
    Catalog::from_json(BUNDLED_CATALOG, currency)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_is_valid() {
        let catalog = bundled_catalog(Currency::USD).unwrap();
        assert_eq!(catalog.len(), 12);
        assert_eq!(catalog.listings()[0].slug.as_str(), "tech-challenge-air");
    }
}
