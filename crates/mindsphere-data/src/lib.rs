//! Content document loading.
//!
//! This crate provides:
//! - `DocumentSource` - Transport seam (browser fetch, in-memory)
//! - `Loader` - Single-attempt fetch, status check, parse and validation
//! - `LoadError` - Network, status, parse and validation failures

mod error;
mod loader;
mod source;

pub use error::*;
pub use loader::*;
pub use source::*;
