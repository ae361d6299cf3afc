//! Interaction handling for the Mindsphere newsletter page.
//!
//! - **Detail view**: two-state (Hidden/Visible) overlay showing one signal item
//! - **Contact forms**: newsletter signup and client inquiry, sent as `mailto:` links
//!
//! Browser specifics sit behind [`DetailSurface`] and [`Navigator`], so every
//! handler here runs against in-memory doubles in tests.

mod contact;
mod detail;

pub use contact::*;
pub use detail::*;
