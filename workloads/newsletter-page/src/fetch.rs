//! Same-origin fetch transport.

use async_trait::async_trait;
use http::StatusCode;
use js_sys::Uint8Array;
use mindsphere_sdk::prelude::{DocumentSource, FetchedDocument, LoadError};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, Window};

use crate::error::describe;

/// Fetches the content document with `window.fetch`.
pub struct FetchSource {
    window: Window,
}

impl FetchSource {
    pub fn new(window: Window) -> Self {
        Self { window }
    }
}

#[async_trait(?Send)]
impl DocumentSource for FetchSource {
    async fn fetch(&self, path: &str) -> Result<FetchedDocument, LoadError> {
        let network = |err: JsValue| LoadError::Network {
            path: path.to_string(),
            reason: describe(&err),
        };

        let response: Response = JsFuture::from(self.window.fetch_with_str(path))
            .await
            .map_err(network)?
            .dyn_into()
            .map_err(network)?;

        let status = StatusCode::from_u16(response.status()).map_err(|e| LoadError::Network {
            path: path.to_string(),
            reason: e.to_string(),
        })?;

        let buffer = JsFuture::from(response.array_buffer().map_err(network)?)
            .await
            .map_err(network)?;

        Ok(FetchedDocument::new(status, Uint8Array::new(&buffer).to_vec()))
    }
}
