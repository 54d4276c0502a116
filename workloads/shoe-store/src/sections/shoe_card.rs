//! Shoe card - one listing with its variant treatment.

use shoe_catalog::{count_label, ShoeListing, Variant};
use store_streaming::{escape_attr, escape_html};

/// Gap between the image and the text rows, in pixels.
const IMAGE_GAP_PX: u32 = 12;

/// Render one card. `variant` must come from the same listing.
pub fn render_shoe_card(listing: &ShoeListing, variant: Variant) -> String {
    let base_price_class = if variant.strikes_base_price() {
        "price price--strikethrough"
    } else {
        "price"
    };

    let sale_price_html = match (variant, listing.sale_price) {
        (Variant::OnSale, Some(sale)) => {
            format!(r#"<span class="sale-price">{}</span>"#, escape_html(&sale.display()))
        }
        _ => String::new(),
    };

    let notice_html = match variant.badge_label() {
        Some(label) => format!(
            r#"<div class="notice notice--{}">{}</div>"#,
            variant.as_str(),
            label
        ),
        None => String::new(),
    };

    format!(
        r#"<a class="shoe-link" href="{href}" data-key="{key}">
    <article class="shoe-card" data-variant="{variant}">
        <div class="shoe-image-wrapper">
            <img class="shoe-image" alt="" src="{image}">
        </div>
        <div class="card-spacer" style="height: {gap}px;"></div>
        <div class="card-row">
            <h3 class="shoe-name">{name}</h3>
            <span class="{price_class}">{price}</span>
        </div>
        <div class="card-row">
            <p class="color-info">{colors}</p>
            {sale_price}
        </div>
        {notice}
    </article>
</a>"#,
        href = escape_attr(&listing.detail_path()),
        key = escape_attr(listing.slug.as_str()),
        variant = variant.as_str(),
        image = escape_attr(&listing.image_src),
        gap = IMAGE_GAP_PX,
        name = escape_html(&listing.name),
        price_class = base_price_class,
        price = escape_html(&listing.price.display()),
        colors = count_label("Color", listing.num_of_colors),
        sale_price = sale_price_html,
        notice = notice_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use shoe_catalog::listing::RawReleaseDate;
    use shoe_catalog::prelude::*;

    fn listing(sale_price: Option<u64>, colors: u32) -> ShoeListing {
        ShoeListing::from_raw(
            RawListing {
                slug: "air-max-90".to_string(),
                name: "Air Max <90>".to_string(),
                image_src: "/assets/air-max-90.jpg".to_string(),
                price: 14999,
                sale_price,
                release_date: RawReleaseDate::Text("2026-10-01".to_string()),
                num_of_colors: colors,
            },
            Currency::USD,
        )
        .unwrap()
    }

    #[test]
    fn test_on_sale_card() {
        let html = render_shoe_card(&listing(Some(9999), 3), Variant::OnSale);

        assert!(html.contains(r#"<span class="price price--strikethrough">$149.99</span>"#));
        assert!(html.contains(r#"<span class="sale-price">$99.99</span>"#));
        assert!(html.contains(r#"<div class="notice notice--on-sale">Sale</div>"#));
        assert!(html.contains(r#"data-variant="on-sale""#));
        assert!(!html.contains("Just released!"));
    }

    #[test]
    fn test_new_release_card() {
        let html = render_shoe_card(&listing(None, 1), Variant::NewRelease);

        assert!(html.contains(r#"<span class="price">$149.99</span>"#));
        assert!(html.contains(r#"<div class="notice notice--new-release">Just released!</div>"#));
        assert!(!html.contains("sale-price"));
        assert!(!html.contains("strikethrough"));
        assert!(html.contains(r#"<p class="color-info">1 Color</p>"#));
    }

    #[test]
    fn test_default_card_has_no_badge() {
        let html = render_shoe_card(&listing(None, 0), Variant::Default);

        assert!(html.contains(r#"<span class="price">$149.99</span>"#));
        assert!(!html.contains("notice"));
        assert!(html.contains(r#"<p class="color-info">0 Colors</p>"#));
    }

    #[test]
    fn test_link_key_and_escaping() {
        let html = render_shoe_card(&listing(None, 2), Variant::Default);

        assert!(html.starts_with(r#"<a class="shoe-link" href="/shoe/air-max-90" data-key="air-max-90">"#));
        assert!(html.contains(r#"<img class="shoe-image" alt="" src="/assets/air-max-90.jpg">"#));
        assert!(html.contains("<h3 class=\"shoe-name\">Air Max &lt;90&gt;</h3>"));
    }

    #[test]
    fn test_name_and_colors_identical_across_variants() {
        let shoe = listing(Some(9999), 4);
        for variant in [Variant::OnSale, Variant::NewRelease, Variant::Default] {
            let html = render_shoe_card(&shoe, variant);
            assert!(html.contains("Air Max &lt;90&gt;"));
            assert!(html.contains("4 Colors"));
        }
    }
}
