//! Core abstractions for the Mindsphere newsletter page.
//!
//! This crate provides the fundamental types shared by every component:
//! - `ContentDocument` - The fetched newsletter content, read-only after load
//! - `Tier` / `SignalRef` - Signal priority buckets and item references
//! - `PageConfig` - Fetch path, contact recipient, mount point identifiers
//! - `PageContext` - Per-page-view identity for log correlation
//! - `MailtoLink` - Pre-filled mail composition URIs

mod config;
mod context;
mod document;
mod error;
mod mailto;
mod tier;

pub use config::*;
pub use context::*;
pub use document::*;
pub use error::*;
pub use mailto::*;
pub use tier::*;
