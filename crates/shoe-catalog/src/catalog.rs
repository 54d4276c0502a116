//! The static listing collection behind the grid.

use std::collections::HashSet;

use crate::error::CatalogError;
use crate::listing::{RawListing, ShoeListing};
use crate::money::Currency;

/// Ordered, validated collection of listings.
///
/// Source order is preserved; slugs are unique.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<ShoeListing>,
}

impl Catalog {
    /// Parse a JSON array of listing records.
    ///
    /// Records are decoded one at a time so a bad field is reported with
    /// the record's position and slug.
    pub fn from_json(json: &str, currency: Currency) -> Result<Self, CatalogError> {
        let records: Vec<serde_json::Value> = serde_json::from_str(json)?;
        let raw = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| decode_record(index, record))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_raw(raw, currency)
    }

    /// Validate raw records.
    pub fn from_raw(raw: Vec<RawListing>, currency: Currency) -> Result<Self, CatalogError> {
        let listings = raw
            .into_iter()
            .map(|r| ShoeListing::from_raw(r, currency))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_listings(listings)
    }

    /// Wrap already-validated listings, rejecting duplicate slugs.
    pub fn from_listings(listings: Vec<ShoeListing>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(listings.len());
        for listing in &listings {
            if !seen.insert(listing.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(listing.slug.to_string()));
            }
        }
        Ok(Self { listings })
    }

    pub fn listings(&self) -> &[ShoeListing] {
        &self.listings
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoeListing> {
        self.listings.iter()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

fn decode_record(index: usize, record: serde_json::Value) -> Result<RawListing, CatalogError> {
    let slug = record
        .get("slug")
        .and_then(|s| s.as_str())
        .map(str::to_string);

    serde_json::from_value(record).map_err(|e| CatalogError::InvalidRecord {
        index,
        slug,
        reason: e.to_string(),
    })
}
