//! Site header: promotional bar, logo and fixed navigation.

use store_streaming::escape_html;

use super::render_super_header;

/// One navigation entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation entries, in display order. The first one gets the accent color.
pub const NAV_LINKS: [NavLink; 6] = [
    NavLink { label: "Sale", href: "/sale" },
    NavLink { label: "New\u{a0}Releases", href: "/new" },
    NavLink { label: "Men", href: "/men" },
    NavLink { label: "Women", href: "/women" },
    NavLink { label: "Kids", href: "/kids" },
    NavLink { label: "Collections", href: "/collections" },
];

/// Render the header section. Both bars share one `<header>` element.
pub fn render_header(brand: &str, promo_message: &str, help_href: &str) -> String {
    let nav_html: String = NAV_LINKS
        .iter()
        .map(|link| {
            format!(
                r#"<a class="nav-link" href="{}">{}</a>"#,
                link.href,
                escape_html(link.label)
            )
        })
        .collect();

    format!(
        r#"<header class="site-header" data-section="header">
{}
<div class="main-header">
    <div class="logo-wrapper"><a class="logo" href="/">{}</a></div>
    <nav class="nav">{}</nav>
    <div class="header-spacer"></div>
</div>
</header>
"#,
        render_super_header(promo_message, help_href),
        escape_html(brand),
        nav_html
    )
}
