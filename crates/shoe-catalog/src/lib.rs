//! Domain types for the shoe catalog page.
//!
//! - **Listings**: `ShoeListing` records loaded from a static JSON collection
//! - **Money**: integer minor-unit prices and their display form
//! - **Variants**: the on-sale / new-release / default card classification
//! - **Text**: count pluralization for card labels
//!
//! # Example
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use shoe_catalog::prelude::*;
//!
//! let json = r#"[{
//!     "slug": "tech-challenge-air",
//!     "name": "Tech Challenge Air",
//!     "imageSrc": "/assets/tech-challenge-air.jpg",
//!     "price": 16500,
//!     "salePrice": null,
//!     "releaseDate": "2026-10-10",
//!     "numOfColors": 2
//! }]"#;
//!
//! let catalog = Catalog::from_json(json, Currency::USD).unwrap();
//! let now = Utc.with_ymd_and_hms(2026, 10, 17, 12, 0, 0).unwrap();
//! let shoe = &catalog.listings()[0];
//!
//! assert_eq!(shoe.variant(now, RecencyWindow::default()), Variant::NewRelease);
//! assert_eq!(shoe.price.display(), "$165.00");
//! assert_eq!(count_label("Color", shoe.num_of_colors), "2 Colors");
//! ```

pub mod catalog;
pub mod error;
pub mod listing;
pub mod money;
pub mod recency;
pub mod slug;
pub mod text;
pub mod variant;

pub use catalog::Catalog;
pub use error::CatalogError;
pub use listing::ShoeListing;
pub use money::{Currency, Money};
pub use recency::RecencyWindow;
pub use slug::Slug;
pub use text::{count_label, pluralize};
pub use variant::Variant;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::catalog::Catalog;
    pub use crate::error::CatalogError;
    pub use crate::listing::{RawListing, ShoeListing};
    pub use crate::money::{Currency, Money};
    pub use crate::recency::RecencyWindow;
    pub use crate::slug::Slug;
    pub use crate::text::{count_label, pluralize};
    pub use crate::variant::Variant;
}
