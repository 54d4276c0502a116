//! Design tokens and page CSS.

/// Gray scale used by text and borders.
pub struct Grays {
    pub g100: &'static str,
    pub g300: &'static str,
    pub g500: &'static str,
    pub g700: &'static str,
    pub g900: &'static str,
}

pub struct Colors {
    pub white: &'static str,
    pub gray: Grays,
    /// Sale accents.
    pub primary: &'static str,
    /// New-release badge and the first nav link.
    pub secondary: &'static str,
}

pub struct Weights {
    pub normal: u16,
    pub medium: u16,
    pub bold: u16,
}

pub const COLORS: Colors = Colors {
    white: "hsl(0deg 0% 100%)",
    gray: Grays {
        g100: "hsl(185deg 5% 95%)",
        g300: "hsl(190deg 5% 80%)",
        g500: "hsl(196deg 4% 60%)",
        g700: "hsl(220deg 5% 40%)",
        g900: "hsl(220deg 3% 20%)",
    },
    primary: "hsl(340deg 65% 47%)",
    secondary: "hsl(240deg 60% 63%)",
};

pub const WEIGHTS: Weights = Weights {
    normal: 500,
    medium: 600,
    bold: 800,
};

/// Full stylesheet, with the tokens exposed as custom properties.
pub fn page_styles() -> String {
    let tokens = format!(
        ":root {{
    --color-white: {white};
    --color-gray-100: {g100};
    --color-gray-300: {g300};
    --color-gray-500: {g500};
    --color-gray-700: {g700};
    --color-gray-900: {g900};
    --color-primary: {primary};
    --color-secondary: {secondary};
    --weight-normal: {normal};
    --weight-medium: {medium};
    --weight-bold: {bold};
}}
",
        white = COLORS.white,
        g100 = COLORS.gray.g100,
        g300 = COLORS.gray.g300,
        g500 = COLORS.gray.g500,
        g700 = COLORS.gray.g700,
        g900 = COLORS.gray.g900,
        primary = COLORS.primary,
        secondary = COLORS.secondary,
        normal = WEIGHTS.normal,
        medium = WEIGHTS.medium,
        bold = WEIGHTS.bold,
    );

    tokens + PAGE_STYLES
}

const PAGE_STYLES: &str = r##"
*, *::before, *::after { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: 'Raleway', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
    font-weight: var(--weight-normal);
    color: var(--color-gray-900);
    line-height: 1.5;
}

/* Promotional bar */
.super-header {
    display: flex;
    align-items: center;
    gap: 24px;
    padding: 12px 32px;
    font-size: 0.875rem;
    color: var(--color-gray-300);
    background: var(--color-gray-900);
}

.marketing-message {
    flex: 1;
    color: var(--color-white);
}

.search-input {
    padding: 2px 8px;
    border: none;
    border-bottom: 1px solid var(--color-gray-300);
    background: transparent;
    color: inherit;
    font-size: inherit;
}

.help-link {
    color: inherit;
    text-decoration: none;
}

/* Main header */
.main-header {
    display: flex;
    align-items: baseline;
    gap: 16px;
    padding: 24px 32px;
    border-bottom: 1px solid var(--color-gray-300);
}

.logo-wrapper {
    flex: 1 1 0px;
    min-width: fit-content;
}

.logo {
    font-size: 1.5rem;
    font-weight: var(--weight-bold);
    color: var(--color-gray-900);
    text-decoration: none;
}

.nav {
    flex: 1 1 auto;
    display: flex;
    gap: 32px;
    align-items: center;
    justify-content: center;
}

.nav-link {
    font-size: 1.125rem;
    text-transform: uppercase;
    text-decoration: none;
    color: var(--color-gray-900);
    font-weight: var(--weight-medium);
}

.nav-link:first-of-type {
    color: var(--color-secondary);
}

.header-spacer {
    flex: 1 1 0px;
}

/* Catalog */
.catalog-main {
    padding: 64px 32px;
}

.shoe-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(200px, 1fr));
    gap: 32px;
}

.shoe-link {
    text-decoration: none;
    color: inherit;
}

.shoe-card {
    position: relative;
}

.shoe-image-wrapper {
    position: relative;
}

.shoe-image {
    display: block;
    width: 100%;
    height: 100%;
    border-radius: 16px 16px 4px 4px;
}

.card-spacer {
    display: block;
}

.card-row {
    display: flex;
    justify-content: space-between;
    align-items: center;
    gap: 16px;
    width: 100%;
    overflow: hidden;
    font-size: 1rem;
}

.shoe-name {
    flex: 1 1 fit-content;
    font-size: inherit;
    font-weight: var(--weight-medium);
    color: var(--color-gray-900);
    white-space: nowrap;
    text-overflow: ellipsis;
    overflow: hidden;
}

.price--strikethrough {
    text-decoration: line-through;
    color: var(--color-gray-500);
}

.sale-price {
    font-weight: var(--weight-medium);
    color: var(--color-primary);
}

.color-info {
    color: var(--color-gray-700);
}

.notice {
    position: absolute;
    top: 12px;
    right: -4px;
    padding: 7px 9px 9px 11px;
    border-radius: 2px;
    font-size: 0.875rem;
    font-weight: var(--weight-bold);
    color: var(--color-white);
}

.notice--on-sale {
    background-color: var(--color-primary);
}

.notice--new-release {
    background-color: var(--color-secondary);
}

/* Error page */
.page-error {
    padding: 64px 32px;
    text-align: center;
    color: var(--color-gray-700);
}
"##;
