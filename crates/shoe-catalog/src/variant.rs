//! Card variant classification.
//!
//! A shoe can be on sale and newly released at the same time. The sale
//! always wins: the classifier checks the sale price first.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;

use crate::money::Money;
use crate::recency::RecencyWindow;

/// Display variant of a shoe card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Variant {
    OnSale,
    NewRelease,
    Default,
}

impl Variant {
    /// Classify from the two inputs that matter, in priority order.
    pub fn classify(
        sale_price: Option<Money>,
        release_date: DateTime<Utc>,
        now: DateTime<Utc>,
        window: RecencyWindow,
    ) -> Self {
        if sale_price.is_some() {
            Variant::OnSale
        } else if window.contains(release_date, now) {
            Variant::NewRelease
        } else {
            Variant::Default
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::OnSale => "on-sale",
            Variant::NewRelease => "new-release",
            Variant::Default => "default",
        }
    }

    /// Badge text, if the variant shows one.
    pub fn badge_label(&self) -> Option<&'static str> {
        match self {
            Variant::OnSale => Some("Sale"),
            Variant::NewRelease => Some("Just released!"),
            Variant::Default => None,
        }
    }

    /// Whether the base price is struck through and dimmed.
    pub fn strikes_base_price(&self) -> bool {
        matches!(self, Variant::OnSale)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
