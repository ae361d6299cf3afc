//! Rendering for the Mindsphere newsletter page.
//!
//! Rendering is a pure mapping from a [`ContentDocument`](mindsphere_core::ContentDocument)
//! to a tree of [`Node`]s. The tree is then appended to any [`Mount`]: a plain
//! `Vec<Node>` in tests, the real DOM in the browser.
//!
//! Signal cards carry a typed [`ClickAction`] naming the item they show.
//! Nothing else about the item is attached to the tree.

mod mount;
mod node;
mod renderer;
pub mod sections;

pub use mount::*;
pub use node::*;
pub use renderer::*;
