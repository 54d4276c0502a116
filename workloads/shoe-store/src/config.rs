//! Store page configuration.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use store_core::{LogFormat, LogLevel};

use shoe_catalog::{Currency, RecencyWindow};

/// Configuration bundled with the component.
pub const BUNDLED_CONFIG: &str = include_str!("../store.toml");

/// Store page configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub catalog: CatalogSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl StoreConfig {
    /// Parse and validate the bundled `store.toml`.
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CONFIG).context("Failed to load bundled store.toml")
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content).context("Failed to parse TOML config")?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: StoreConfig =
            serde_json::from_str(content).context("Failed to parse JSON config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a file; `.json` files are JSON, everything else TOML.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        let config = if path.ends_with(".json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        };
        config.with_context(|| format!("Invalid config file: {}", path))
    }

    pub fn validate(&self) -> Result<()> {
        self.currency()?;

        if !self.catalog.calendar_month && self.catalog.rolling_days == 0 {
            bail!("catalog.rolling_days must be at least 1");
        }
        if self.store.brand.trim().is_empty() {
            bail!("store.brand must not be empty");
        }

        Ok(())
    }

    /// Currency every listing price is shown in.
    pub fn currency(&self) -> Result<Currency> {
        Ok(Currency::from_code(&self.store.currency)?)
    }

    /// Window used to decide the "new release" variant.
    pub fn recency_window(&self) -> RecencyWindow {
        if self.catalog.calendar_month {
            RecencyWindow::CalendarMonth
        } else {
            RecencyWindow::RollingDays(self.catalog.rolling_days)
        }
    }
}

/// Storefront text and pricing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Document title.
    #[serde(default = "default_brand")]
    pub title: String,

    /// Logo text.
    #[serde(default = "default_brand")]
    pub brand: String,

    /// ISO currency code for listing prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Message in the promotional bar above the header.
    #[serde(default = "default_promo")]
    pub promo_message: String,

    /// Target of the "Help" link in the promotional bar.
    #[serde(default = "default_help_href")]
    pub help_href: String,
}

fn default_brand() -> String {
    "Sole&Ankle".to_string()
}

fn default_currency() -> String {
    "USD".to_string()
}

fn default_promo() -> String {
    "Free shipping on domestic orders over $75!".to_string()
}

fn default_help_href() -> String {
    "/help".to_string()
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            title: default_brand(),
            brand: default_brand(),
            currency: default_currency(),
            promo_message: default_promo(),
            help_href: default_help_href(),
        }
    }
}

/// Catalog classification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_rolling_days")]
    pub rolling_days: u32,

    #[serde(default)]
    pub calendar_month: bool,
}

fn default_rolling_days() -> u32 {
    30
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            rolling_days: default_rolling_days(),
            calendar_month: false,
        }
    }
}

/// Logger settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSettings {
    #[serde(default)]
    pub level: LogLevel,

    #[serde(default)]
    pub format: LogFormat,
}
