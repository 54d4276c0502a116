//! Per-request context.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::lifecycle::TimingContext;

/// Unique request identifier, echoed in `x-request-id` and every log line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(pub String);

impl RequestId {
    /// Generate a new request ID from the clock and a process-wide counter.
    pub fn generate() -> Self {
        static COUNTER: AtomicU32 = AtomicU32::new(0);

        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();
        let seq = COUNTER.fetch_add(1, Ordering::Relaxed);

        Self(format!("{:x}-{:04x}", nanos, seq))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// HTTP method as seen by the page handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Other,
}

impl Method {
    /// Only GET and HEAD produce a page.
    pub fn is_read(&self) -> bool {
        matches!(self, Method::Get | Method::Head)
    }
}

/// Request context passed through a single page render.
#[derive(Debug)]
pub struct RequestContext {
    /// Unique request identifier.
    pub request_id: RequestId,
    /// HTTP method.
    pub method: Method,
    /// Request path without the query string.
    pub path: String,
    /// Timing marks for the render.
    pub timing: TimingContext,
}

impl RequestContext {
    /// Create a context from a raw `path?query` string. The query is dropped.
    pub fn new(method: Method, path_with_query: &str) -> Self {
        let path = path_with_query
            .split_once('?')
            .map_or(path_with_query, |(path, _)| path);

        Self {
            request_id: RequestId::generate(),
            method,
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            timing: TimingContext::new(),
        }
    }
}
