//! Listing slug newtype.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Stable listing identifier; also the key of its card in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Slug(String);

impl Slug {
    /// Validate and wrap a slug.
    pub fn parse(s: impl Into<String>) -> Result<Self, CatalogError> {
        let s = s.into();
        let valid = !s.is_empty()
            && !s.starts_with('-')
            && !s.ends_with('-')
            && s.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if valid {
            Ok(Self(s))
        } else {
            Err(CatalogError::InvalidSlug(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Detail page link for this listing.
    pub fn detail_path(&self) -> String {
        format!("/shoe/{}", self.0)
    }
}

impl TryFrom<String> for Slug {
    type Error = CatalogError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Slug::parse(s)
    }
}

impl From<Slug> for String {
    fn from(slug: Slug) -> Self {
        slug.0
    }
}

impl fmt::Display for Slug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_slug() {
        let slug = Slug::parse("air-max-270").unwrap();
        assert_eq!(slug.as_str(), "air-max-270");
        assert_eq!(slug.detail_path(), "/shoe/air-max-270");
    }

    #[test]
    fn test_invalid_slugs() {
        for bad in ["", "Air-Max", "air max", "-leading", "trailing-", "a/b", "caf\u{e9}"] {
            assert!(Slug::parse(bad).is_err(), "{bad:?} should be rejected");
        }
    }
}
