//! Full page renders from a fixture catalog.

use chrono::{DateTime, TimeZone, Utc};
use shoe_catalog::{Catalog, CatalogError, Currency};
use shoe_store::sections::NAV_LINKS;
use shoe_store::{CatalogPage, StoreConfig};

const FIXTURE: &str = include_str!("fixtures/catalog.json");

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 0, 0, 0).unwrap()
}

fn render(config: &StoreConfig) -> String {
    let catalog = Catalog::from_json(FIXTURE, config.currency().unwrap()).unwrap();
    CatalogPage::render(&catalog, config, now()).to_html()
}

/// Slice of the page belonging to the card keyed by `slug`.
fn card<'a>(html: &'a str, slug: &str) -> &'a str {
    let start = html.find(&format!(r#"data-key="{}""#, slug)).unwrap();
    let end = html[start..].find("</a>").unwrap();
    &html[start..start + end]
}

#[test]
fn test_one_card_per_record_in_source_order() {
    let html = render(&StoreConfig::default());

    let keys: Vec<&str> = html
        .split(r#"data-key=""#)
        .skip(1)
        .map(|rest| &rest[..rest.find('"').unwrap()])
        .collect();
    assert_eq!(keys, ["old-sale", "fresh-drop", "back-catalog", "fresh-sale"]);
}

#[test]
fn test_variants_per_card() {
    let html = render(&StoreConfig::default());

    let old_sale = card(&html, "old-sale");
    assert!(old_sale.contains(r#"data-variant="on-sale""#));
    assert!(old_sale.contains(r#"<span class="price price--strikethrough">$120.00</span>"#));
    assert!(old_sale.contains(r#"<span class="sale-price">$99.99</span>"#));
    assert!(old_sale.contains(">Sale</div>"));

    let fresh = card(&html, "fresh-drop");
    assert!(fresh.contains(r#"data-variant="new-release""#));
    assert!(fresh.contains(r#"<span class="price">$149.99</span>"#));
    assert!(fresh.contains("Just released!"));
    assert!(fresh.contains("1 Color<"));

    let back = card(&html, "back-catalog");
    assert!(back.contains(r#"data-variant="default""#));
    assert!(!back.contains("notice"));
    assert!(back.contains("0 Colors"));

    let fresh_sale = card(&html, "fresh-sale");
    assert!(fresh_sale.contains(r#"data-variant="on-sale""#));
    assert!(!fresh_sale.contains("Just released!"));
}

#[test]
fn test_calendar_month_config() {
    let config = StoreConfig::from_toml_str("[catalog]\ncalendar_month = true\n").unwrap();
    let html = render(&config);
    assert!(card(&html, "fresh-drop").contains(r#"data-variant="new-release""#));
    assert!(card(&html, "back-catalog").contains(r#"data-variant="default""#));
}

#[test]
fn test_currency_from_config() {
    let config = StoreConfig::from_toml_str("[store]\ncurrency = \"GBP\"\n").unwrap();
    let html = render(&config);
    assert!(card(&html, "fresh-drop").contains("\u{00a3}149.99"));
}

#[test]
fn test_header_navigation() {
    let html = render(&StoreConfig::default());
    for link in NAV_LINKS {
        assert!(html.contains(&format!(r#"href="{}""#, link.href)));
    }
    assert!(html.contains("Free shipping on domestic orders over $75!"));
}

#[test]
fn test_duplicate_slugs_never_reach_the_grid() {
    let json = FIXTURE.replace("\"fresh-sale\"", "\"old-sale\"");
    let err = Catalog::from_json(&json, Currency::USD).unwrap_err();
    assert!(matches!(err, CatalogError::DuplicateSlug(slug) if slug == "old-sale"));
}
