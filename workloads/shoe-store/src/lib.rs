//! Shoe store catalog page.
//!
//! Renders the storefront header and a grid of shoe cards with shell-first
//! streaming SSR:
//! - The shell (head and inline CSS) is written first
//! - The `header` section follows: promotional bar, logo, navigation
//! - The `shoe-grid` section holds one card per bundled listing, each
//!   classified as on-sale, new-release or default at request time

pub mod config;
pub mod data;
pub mod page;
pub mod sections;
pub mod styles;

use anyhow::anyhow;
use chrono::Utc;
use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, Method, OutgoingResponse, ResponseOutparam};
#[cfg(target_arch = "wasm32")]
use spin_sdk::http_component;

use store_core::{LogLevel, RequestContext, StructuredLogger};
use store_streaming::StreamingSink;

pub use config::StoreConfig;
pub use data::bundled_catalog;
pub use page::{render_error_page, CatalogPage, PageSection};

/// Name used in logs.
pub const WORKLOAD_NAME: &str = "shoe-store";

/// Catalog page handler.
#[cfg_attr(target_arch = "wasm32", http_component)]
async fn handle_catalog(req: IncomingRequest, response_out: ResponseOutparam) {
    let path_with_query = req.path_with_query().unwrap_or_default();
    let ctx = RequestContext::new(platform_method(&req.method()), &path_with_query);

    let mut logger = StructuredLogger::new(ctx.request_id.clone())
        .with_workload(WORKLOAD_NAME)
        .with_route(&ctx.path);

    let config = match StoreConfig::bundled() {
        Ok(config) => config,
        Err(e) => {
            logger
                .warn_builder("Invalid bundled config, using defaults")
                .field("error", format!("{:#}", e))
                .emit();
            StoreConfig::default()
        }
    };
    logger = logger
        .with_min_level(config.logging.level)
        .with_format(config.logging.format);

    if !ctx.method.is_read() {
        logger.warn("Method not allowed");
        send_plain(response_out, 405, &ctx, "Method Not Allowed", &logger).await;
        return;
    }

    logger.debug("Catalog request started");

    let catalog = config
        .currency()
        .and_then(|currency| bundled_catalog(currency).map_err(anyhow::Error::from));
    let catalog = match catalog {
        Ok(catalog) => catalog,
        Err(e) => {
            logger
                .error_builder("Catalog failed validation")
                .field("error", format!("{:#}", e))
                .emit();
            let html = render_error_page(&config, "The catalog is unavailable right now.");
            send_html(response_out, 500, &ctx, html, &logger).await;
            return;
        }
    };

    let page = CatalogPage::render(&catalog, &config, Utc::now());
    let summary = page.summary();

    let response = match new_response(200, &ctx, "text/html; charset=utf-8") {
        Ok(response) => response,
        Err(e) => {
            logger
                .error_builder("Failed to build response")
                .field("error", e.to_string())
                .emit();
            return;
        }
    };
    let body = response.take_body();
    response_out.set(response);

    if ctx.method == store_core::Method::Head {
        return;
    }

    let mut sink = StreamingSink::new(body, ctx.timing);
    if let Err(e) = page.stream(&mut sink).await {
        logger
            .error_builder("Failed to stream catalog page")
            .field("error", e.to_string())
            .field("phase", format!("{:?}", sink.phase()))
            .emit();
        return;
    }

    let mut done = logger
        .info_builder("Catalog page rendered")
        .field_i64("cards", summary.total() as i64)
        .field_i64("on_sale", summary.on_sale as i64)
        .field_i64("new_release", summary.new_release as i64)
        .field_i64("bytes", sink.bytes_sent() as i64)
        .field_bool("completed", sink.timing().has_mark("complete"))
        .field("recency", config.recency_window().describe())
        .duration_ms("total_ms", sink.timing().elapsed());
    if let Some(shell) = sink.timing().time_to_shell() {
        done = done.duration_ms("shell_ms", shell);
    }
    done.emit();

    if logger.enabled(LogLevel::Debug) {
        for name in sink.sections_sent() {
            if let Some(timing) = sink.timing().section_timing(name) {
                logger
                    .debug_builder("Section sent")
                    .field("section", timing.name)
                    .duration_ms("duration_ms", timing.duration)
                    .emit();
            }
        }
    }
}

fn platform_method(method: &Method) -> store_core::Method {
    match method {
        Method::Get => store_core::Method::Get,
        Method::Head => store_core::Method::Head,
        Method::Post => store_core::Method::Post,
        _ => store_core::Method::Other,
    }
}

fn new_response(
    status: u16,
    ctx: &RequestContext,
    content_type: &str,
) -> anyhow::Result<OutgoingResponse> {
    let header_list: Vec<(String, Vec<u8>)> = vec![
        ("content-type".to_owned(), content_type.as_bytes().to_vec()),
        ("x-request-id".to_owned(), ctx.request_id.to_string().into_bytes()),
    ];

    let headers =
        Fields::from_list(&header_list).map_err(|e| anyhow!("invalid headers: {:?}", e))?;
    let response = OutgoingResponse::new(headers);
    response
        .set_status_code(status)
        .map_err(|_| anyhow!("invalid status code {}", status))?;
    Ok(response)
}

async fn send_html(
    response_out: ResponseOutparam,
    status: u16,
    ctx: &RequestContext,
    html: String,
    logger: &StructuredLogger,
) {
    send_body(response_out, status, ctx, "text/html; charset=utf-8", html, logger).await;
}

async fn send_plain(
    response_out: ResponseOutparam,
    status: u16,
    ctx: &RequestContext,
    text: &str,
    logger: &StructuredLogger,
) {
    send_body(response_out, status, ctx, "text/plain; charset=utf-8", text.to_string(), logger)
        .await;
}

async fn send_body(
    response_out: ResponseOutparam,
    status: u16,
    ctx: &RequestContext,
    content_type: &str,
    body_text: String,
    logger: &StructuredLogger,
) {
    let response = match new_response(status, ctx, content_type) {
        Ok(response) => response,
        Err(e) => {
            logger
                .error_builder("Failed to build response")
                .field("error", e.to_string())
                .emit();
            return;
        }
    };

    let mut body = response.take_body();
    response_out.set(response);
    if let Err(e) = body.send(body_text.into_bytes()).await {
        logger
            .error_builder("Failed to write response body")
            .field("error", e.to_string())
            .field_i64("status", i64::from(status))
            .emit();
    }
}
