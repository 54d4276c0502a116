//! Promotional bar above the main header.

use store_streaming::{escape_attr, escape_html};

/// Render the promotional bar: marketing message, search box and help link.
pub fn render_super_header(promo_message: &str, help_href: &str) -> String {
    format!(
        r#"<div class="super-header">
    <p class="marketing-message">{}</p>
    <form class="search-form" action="/search" method="GET" role="search">
        <input class="search-input" type="search" name="q" placeholder="Search&hellip;" aria-label="Search">
    </form>
    <a class="help-link" href="{}">Help</a>
</div>"#,
        escape_html(promo_message),
        escape_attr(help_href)
    )
}
