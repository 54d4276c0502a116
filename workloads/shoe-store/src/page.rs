//! Catalog page assembly.

use std::fmt::Display;

use chrono::{DateTime, Utc};
use futures::Sink;
use shoe_catalog::Catalog;
use store_core::RenderError;
use store_streaming::{escape_html, HeadContent, Shell, StreamingSink};

use crate::config::StoreConfig;
use crate::sections::{render_header, render_shoe_grid, GridSummary};
use crate::styles::page_styles;

/// A named, already-rendered part of the page.
#[derive(Debug, Clone)]
pub struct PageSection {
    pub name: &'static str,
    pub html: String,
}

/// The catalog page: shell plus its sections, in write order.
#[derive(Debug, Clone)]
pub struct CatalogPage {
    shell: Shell,
    sections: Vec<PageSection>,
    summary: GridSummary,
}

impl CatalogPage {
    /// Render every section for evaluation time `now`.
    pub fn render(catalog: &Catalog, config: &StoreConfig, now: DateTime<Utc>) -> Self {
        let header = render_header(
            &config.store.brand,
            &config.store.promo_message,
            &config.store.help_href,
        );
        let (grid, summary) = render_shoe_grid(catalog, now, config.recency_window());

        Self {
            shell: create_shell(config),
            sections: vec![
                PageSection { name: "header", html: header },
                PageSection { name: "shoe-grid", html: grid },
            ],
            summary,
        }
    }

    pub fn sections(&self) -> &[PageSection] {
        &self.sections
    }

    pub fn summary(&self) -> GridSummary {
        self.summary
    }

    /// The whole document as one string.
    pub fn to_html(&self) -> String {
        let mut html = self.shell.render_opening();
        for section in &self.sections {
            html.push_str(&section.html);
        }
        html.push_str(&self.shell.render_closing());
        html
    }

    /// Write the shell, each section, then the closing shell.
    pub async fn stream<S, E>(&self, sink: &mut StreamingSink<S, E>) -> Result<(), RenderError>
    where
        S: Sink<Vec<u8>, Error = E> + Unpin,
        E: Display,
    {
        sink.send_shell(&self.shell.render_opening()).await?;
        for section in &self.sections {
            sink.send_section(section.name, &section.html).await?;
        }
        sink.complete(&self.shell.render_closing()).await
    }
}

fn create_shell(config: &StoreConfig) -> Shell {
    let head = HeadContent::new(config.store.title.clone())
        .with_meta("viewport", "width=device-width, initial-scale=1")
        .with_meta("description", "Shop the latest shoe releases and sales")
        .with_style(&page_styles());

    Shell::new(head).with_body_start("<body class=\"storefront\">\n")
}

/// Standalone page shown when the catalog cannot be rendered.
pub fn render_error_page(config: &StoreConfig, message: &str) -> String {
    let shell = create_shell(config);
    format!(
        r#"{}<main class="page-error">
    <h1>Something went wrong</h1>
    <p>{}</p>
</main>
{}"#,
        shell.render_opening(),
        escape_html(message),
        shell.render_closing()
    )
}
