//! Catalog error types.

use thiserror::Error;

/// Errors raised while loading or validating listing records.
///
/// Classification never fails; anything malformed is rejected here first.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document is not a JSON array of objects.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// One record has a missing field or a field of the wrong type.
    #[error(
        "Listing #{index} ({}) is malformed: {reason}",
        .slug.as_deref().unwrap_or("no slug")
    )]
    InvalidRecord {
        index: usize,
        slug: Option<String>,
        reason: String,
    },

    /// A required text field is empty.
    #[error("Listing {slug:?} has an empty {field}")]
    EmptyField { slug: String, field: &'static str },

    /// Slug is not usable in a `/shoe/{slug}` path.
    #[error("Invalid slug {0:?}: expected lowercase letters, digits and dashes")]
    InvalidSlug(String),

    /// Two listings share a slug.
    #[error("Duplicate slug: {0}")]
    DuplicateSlug(String),

    /// Release date could not be read.
    #[error("Listing {slug:?} has an invalid release date {value:?}")]
    InvalidDate { slug: String, value: String },

    /// Currency code not supported.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
