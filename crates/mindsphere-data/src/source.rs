//! Document transport.

use std::collections::HashMap;

use async_trait::async_trait;
use http::StatusCode;

use crate::error::LoadError;

/// Raw response for a document request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedDocument {
    pub status: StatusCode,
    pub body: Vec<u8>,
}

impl FetchedDocument {
    pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 200 response with the given body.
    pub fn ok(body: impl Into<Vec<u8>>) -> Self {
        Self::new(StatusCode::OK, body)
    }
}

/// Where the content document comes from.
///
/// Implementations only move bytes. Status and body interpretation belong to
/// the [`Loader`](crate::Loader). Futures are not `Send`: the browser runs
/// everything on one thread.
#[async_trait(?Send)]
pub trait DocumentSource {
    /// Fetch the document at `path`. Fails only on transport errors.
    async fn fetch(&self, path: &str) -> Result<FetchedDocument, LoadError>;
}

/// In-memory source keyed by path. Unknown paths answer 404.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    responses: HashMap<String, Result<FetchedDocument, String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` with status 200 at `path`.
    pub fn with_document(mut self, path: impl Into<String>, body: impl Into<Vec<u8>>) -> Self {
        self.responses.insert(path.into(), Ok(FetchedDocument::ok(body)));
        self
    }

    /// Serve a fixed response at `path`.
    pub fn with_response(mut self, path: impl Into<String>, response: FetchedDocument) -> Self {
        self.responses.insert(path.into(), Ok(response));
        self
    }

    /// Fail requests for `path` with a network error.
    pub fn with_network_failure(
        mut self,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        self.responses.insert(path.into(), Err(reason.into()));
        self
    }
}

#[async_trait(?Send)]
impl DocumentSource for MemorySource {
    async fn fetch(&self, path: &str) -> Result<FetchedDocument, LoadError> {
        match self.responses.get(path) {
            Some(Ok(response)) => Ok(response.clone()),
            Some(Err(reason)) => Err(LoadError::Network {
                path: path.to_string(),
                reason: reason.clone(),
            }),
            None => Ok(FetchedDocument::new(StatusCode::NOT_FOUND, Vec::new())),
        }
    }
}
