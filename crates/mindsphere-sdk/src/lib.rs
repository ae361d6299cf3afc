//! Public SDK for the Mindsphere newsletter page.
//!
//! This crate re-exports every component:
//!
//! ```ignore
//! use mindsphere_sdk::prelude::*;
//!
//! async fn boot(ctx: PageContext, source: impl DocumentSource) -> Result<(), LoadError> {
//!     let logger = PageLogger::from_context(&ctx);
//!     let doc = Loader::new(source, &ctx, &logger).load().await?;
//!
//!     let mut root: Vec<Node> = Vec::new();
//!     Renderer::new(&ctx, &logger).render(&doc, &mut root);
//!
//!     let mut detail = DetailController::new(MemorySurface::new(), &logger);
//!     detail.activate(&doc, ClickAction::ShowDetail(SignalRef::new(Tier::Primary, 0)));
//!     Ok(())
//! }
//! ```

pub use mindsphere_core;
pub use mindsphere_data;
pub use mindsphere_interact;
pub use mindsphere_observability;
pub use mindsphere_render;

/// Prelude for convenient imports.
pub mod prelude {
    pub use mindsphere_core::*;
    pub use mindsphere_data::*;
    pub use mindsphere_interact::*;
    pub use mindsphere_observability::*;
    pub use mindsphere_render::*;
}
