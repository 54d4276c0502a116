//! Money type for listing prices.
//!
//! Prices are stored in the smallest unit of the currency (cents for USD)
//! and formatted with integer arithmetic only.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CatalogError;

/// Currencies the store can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    JPY,
}

impl Currency {
    /// ISO code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::JPY => "JPY",
        }
    }

    /// Display symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Digits after the decimal point.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Parse a currency code, case-insensitively.
    pub fn from_code(code: &str) -> Result<Self, CatalogError> {
        match code.to_uppercase().as_str() {
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "CAD" => Ok(Currency::CAD),
            "JPY" => Ok(Currency::JPY),
            _ => Err(CatalogError::UnknownCurrency(code.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A price in minor units of a currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the smallest currency unit.
    pub amount_minor: u64,
    pub currency: Currency,
}

impl Money {
    pub fn new(amount_minor: u64, currency: Currency) -> Self {
        Self {
            amount_minor,
            currency,
        }
    }

    #[cfg(test)]
    pub(crate) fn usd(cents: u64) -> Self {
        Self::new(cents, Currency::USD)
    }

    /// Format for display, e.g. `$149.99`, `$165.00`, `¥100`.
    pub fn display(&self) -> String {
        let places = self.currency.decimal_places();
        if places == 0 {
            return format!("{}{}", self.currency.symbol(), self.amount_minor);
        }

        let divisor = 10_u64.pow(places);
        format!(
            "{}{}.{:0width$}",
            self.currency.symbol(),
            self.amount_minor / divisor,
            self.amount_minor % divisor,
            width = places as usize
        )
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_usd() {
        assert_eq!(Money::usd(14999).display(), "$149.99");
        assert_eq!(Money::usd(16500).display(), "$165.00");
        assert_eq!(Money::usd(5).display(), "$0.05");
        assert_eq!(Money::usd(0).display(), "$0.00");
    }

    #[test]
    fn test_display_other_currencies() {
        assert_eq!(Money::new(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::new(9999, Currency::EUR).display(), "\u{20ac}99.99");
        assert_eq!(Money::new(12050, Currency::CAD).to_string(), "CA$120.50");
    }

    #[test]
    fn test_large_amount_has_no_grouping() {
        assert_eq!(Money::usd(123_456_789).display(), "$1234567.89");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("usd").unwrap(), Currency::USD);
        assert_eq!(Currency::from_code("GBP").unwrap(), Currency::GBP);
        assert!(matches!(
            Currency::from_code("XYZ"),
            Err(CatalogError::UnknownCurrency(code)) if code == "XYZ"
        ));
    }
}
