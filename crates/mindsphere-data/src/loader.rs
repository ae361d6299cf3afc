//! Single-attempt content loader.

use mindsphere_core::{ContentDocument, PageContext};
use mindsphere_observability::PageLogger;

use crate::error::LoadError;
use crate::source::DocumentSource;

/// Loads the content document once per page view.
///
/// `load` consumes the loader: there is no retry and no cache.
pub struct Loader<S> {
    source: S,
    path: String,
    logger: PageLogger,
}

impl<S: DocumentSource> Loader<S> {
    /// Create a loader for the configured document path.
    pub fn new(source: S, ctx: &PageContext, logger: &PageLogger) -> Self {
        Self {
            source,
            path: ctx.config.document_path.clone(),
            logger: logger.for_component("loader"),
        }
    }

    /// Fetch, check status, parse and validate the document.
    pub async fn load(self) -> Result<ContentDocument, LoadError> {
        self.logger
            .debug_builder("fetching content document")
            .field("path", self.path.as_str())
            .emit();

        let result = self.fetch_and_parse().await;

        match &result {
            Ok(doc) => self
                .logger
                .info_builder("content document loaded")
                .field("path", self.path.as_str())
                .field_u64("signals", doc.signals.len() as u64)
                .emit(),
            Err(e) => self
                .logger
                .error_builder("failed to load content document")
                .field("path", self.path.as_str())
                .field("kind", e.kind())
                .field("error", e.to_string())
                .emit(),
        }

        result
    }

    async fn fetch_and_parse(&self) -> Result<ContentDocument, LoadError> {
        let response = self.source.fetch(&self.path).await?;

        if !response.status.is_success() {
            return Err(LoadError::Status {
                status: response.status,
                path: self.path.clone(),
            });
        }

        let doc = ContentDocument::from_slice(&response.body).map_err(|source| LoadError::Parse {
            path: self.path.clone(),
            source,
        })?;

        doc.validate().map_err(|source| LoadError::Invalid {
            path: self.path.clone(),
            source,
        })?;

        Ok(doc)
    }
}
