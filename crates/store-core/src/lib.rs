//! Core request plumbing for the shoe store page.
//!
//! This crate provides:
//! - `RequestContext` - Per-request identity, method and path
//! - `TimingContext` / `LifecyclePhase` - Render lifecycle tracking
//! - `RenderError` - Errors surfaced while producing a page
//! - `StructuredLogger` - JSON or human-readable logs to stderr

mod context;
mod error;
mod lifecycle;
mod logging;

pub use context::*;
pub use error::*;
pub use lifecycle::*;
pub use logging::*;
