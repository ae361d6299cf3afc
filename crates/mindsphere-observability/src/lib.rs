//! Observability infrastructure for the Mindsphere newsletter page.
//!
//! This crate provides:
//! - `PageLogger` - Structured logging with page view and component context
//! - `LogSink` - Pluggable output (stderr, in-memory, browser console)

mod logging;
mod sink;

pub use logging::*;
pub use sink::*;

// Re-export shared logging types from mindsphere-core for convenience
pub use mindsphere_core::{LogFormat, LogLevel, PageViewId};
