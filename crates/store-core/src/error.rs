//! Render error type.

use thiserror::Error;

/// Errors that can occur while producing a page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Shell not sent before sections")]
    ShellNotSent,

    #[error("Streaming error: {0}")]
    StreamError(String),
}
