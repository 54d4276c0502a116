//! Shoe listing records.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::money::{Currency, Money};
use crate::recency::RecencyWindow;
use crate::slug::Slug;
use crate::variant::Variant;

/// Release date as it appears in source data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawReleaseDate {
    /// Milliseconds since the Unix epoch.
    Millis(i64),
    /// RFC 3339 timestamp or a `YYYY-MM-DD` date (midnight UTC).
    Text(String),
}

/// A listing exactly as read from the JSON collection.
///
/// Field types are enforced by serde: a `salePrice` that is not a number or
/// null fails the whole parse instead of reaching the classifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListing {
    pub slug: String,
    pub name: String,
    pub image_src: String,
    pub price: u64,
    #[serde(default)]
    pub sale_price: Option<u64>,
    pub release_date: RawReleaseDate,
    pub num_of_colors: u32,
}

/// A validated, immutable listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoeListing {
    pub slug: Slug,
    pub name: String,
    pub image_src: String,
    pub price: Money,
    /// Present means on sale.
    pub sale_price: Option<Money>,
    pub release_date: DateTime<Utc>,
    pub num_of_colors: u32,
}

impl ShoeListing {
    /// Validate a raw record, pricing it in `currency`.
    pub fn from_raw(raw: RawListing, currency: Currency) -> Result<Self, CatalogError> {
        let slug = Slug::parse(raw.slug)?;

        for (field, value) in [("name", &raw.name), ("imageSrc", &raw.image_src)] {
            if value.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    slug: slug.to_string(),
                    field,
                });
            }
        }

        let release_date = parse_release_date(&raw.release_date).ok_or_else(|| {
            CatalogError::InvalidDate {
                slug: slug.to_string(),
                value: match &raw.release_date {
                    RawReleaseDate::Millis(ms) => ms.to_string(),
                    RawReleaseDate::Text(s) => s.clone(),
                },
            }
        })?;

        Ok(Self {
            slug,
            name: raw.name,
            image_src: raw.image_src,
            price: Money::new(raw.price, currency),
            sale_price: raw.sale_price.map(|p| Money::new(p, currency)),
            release_date,
            num_of_colors: raw.num_of_colors,
        })
    }

    /// Card variant at evaluation time `now`.
    pub fn variant(&self, now: DateTime<Utc>, window: RecencyWindow) -> Variant {
        Variant::classify(self.sale_price, self.release_date, now, window)
    }

    /// Link target of this listing's card.
    pub fn detail_path(&self) -> String {
        self.slug.detail_path()
    }
}

fn parse_release_date(raw: &RawReleaseDate) -> Option<DateTime<Utc>> {
    match raw {
        RawReleaseDate::Millis(ms) => DateTime::from_timestamp_millis(*ms),
        RawReleaseDate::Text(s) => {
            if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
                return Some(dt.with_timezone(&Utc));
            }
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map(|dt| dt.and_utc())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn raw(slug: &str) -> RawListing {
        RawListing {
            slug: slug.to_string(),
            name: "Pegasus Trail".to_string(),
            image_src: "/assets/pegasus-trail.jpg".to_string(),
            price: 13000,
            sale_price: None,
            release_date: RawReleaseDate::Text("2026-09-01".to_string()),
            num_of_colors: 3,
        }
    }

    #[test]
    fn test_from_raw() {
        let listing = ShoeListing::from_raw(raw("pegasus-trail"), Currency::USD).unwrap();
        assert_eq!(listing.slug.as_str(), "pegasus-trail");
        assert_eq!(listing.price, Money::usd(13000));
        assert_eq!(listing.sale_price, None);
        assert_eq!(
            listing.release_date,
            Utc.with_ymd_and_hms(2026, 9, 1, 0, 0, 0).unwrap()
        );
        assert_eq!(listing.detail_path(), "/shoe/pegasus-trail");
    }

    #[test]
    fn test_release_date_formats() {
        let rfc = RawReleaseDate::Text("2026-09-01T10:00:00+02:00".to_string());
        assert_eq!(
            parse_release_date(&rfc),
            Some(Utc.with_ymd_and_hms(2026, 9, 1, 8, 0, 0).unwrap())
        );

        let millis = RawReleaseDate::Millis(1_780_000_000_000);
        assert_eq!(
            parse_release_date(&millis).map(|d| d.timestamp_millis()),
            Some(1_780_000_000_000)
        );

        assert_eq!(parse_release_date(&RawReleaseDate::Text("yesterday".into())), None);
    }

    #[test]
    fn test_invalid_date_rejected() {
        let mut bad = raw("pegasus-trail");
        bad.release_date = RawReleaseDate::Text("2026-13-40".to_string());
        let err = ShoeListing::from_raw(bad, Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::InvalidDate { .. }));
    }

    #[test]
    fn test_empty_name_rejected() {
        let mut bad = raw("pegasus-trail");
        bad.name = "  ".to_string();
        let err = ShoeListing::from_raw(bad, Currency::USD).unwrap_err();
        assert!(matches!(err, CatalogError::EmptyField { field: "name", .. }));
    }

    #[test]
    fn test_string_sale_price_fails_to_parse() {
        let json = r#"{
            "slug": "pegasus-trail",
            "name": "Pegasus Trail",
            "imageSrc": "/assets/pegasus-trail.jpg",
            "price": 13000,
            "salePrice": "9999",
            "releaseDate": "2026-09-01",
            "numOfColors": 3
        }"#;
        assert!(serde_json::from_str::<RawListing>(json).is_err());
    }

    #[test]
    fn test_variant_uses_sale_price() {
        let mut on_sale = raw("pegasus-trail");
        on_sale.sale_price = Some(9900);
        let listing = ShoeListing::from_raw(on_sale, Currency::USD).unwrap();

        let now = listing.release_date + Duration::days(2);
        assert_eq!(listing.variant(now, RecencyWindow::default()), Variant::OnSale);
        assert_eq!(listing.sale_price.map(|p| p.display()), Some("$99.00".to_string()));
    }
}
