//! Document shell around the streamed sections.

use crate::html::{escape_attr, escape_html};

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Named meta tags.
    pub meta: Vec<(String, String)>,
    /// Raw `<link>`/`<style>` elements, written in order.
    pub links: Vec<String>,
}

impl HeadContent {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add inline CSS. The CSS is trusted and written verbatim.
    pub fn with_style(mut self, css: &str) -> Self {
        self.links.push(format!("<style>{}</style>", css));
        self
    }

    pub fn render(&self) -> String {
        let mut html = String::from("<meta charset=\"utf-8\">\n");

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                escape_attr(name),
                escape_attr(content)
            ));
            html.push('\n');
        }

        for link in &self.links {
            html.push_str(link);
            html.push('\n');
        }

        html
    }
}

/// Shell template: everything before and after the sections.
#[derive(Debug, Clone)]
pub struct Shell {
    pub lang: String,
    pub head: HeadContent,
    /// HTML between `</head>` and the first section.
    pub body_start: String,
    /// HTML after the last section.
    pub body_end: String,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            lang: "en".to_string(),
            head,
            body_start: "<body>\n".to_string(),
            body_end: "</body>\n</html>".to_string(),
        }
    }

    pub fn with_body_start(mut self, html: impl Into<String>) -> Self {
        self.body_start = html.into();
        self
    }

    /// Doctype, `<head>` and `body_start`.
    pub fn render_opening(&self) -> String {
        let mut html = String::from("<!DOCTYPE html>\n");
        html.push_str(&format!("<html lang=\"{}\">\n<head>\n", escape_attr(&self.lang)));
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        html.push_str(&self.body_start);
        html
    }

    pub fn render_closing(&self) -> String {
        self.body_end.clone()
    }
}
