//! Browser binding errors.

use wasm_bindgen::JsValue;

/// Failure wiring the page to the DOM.
#[derive(Debug, thiserror::Error)]
pub enum MountError {
    #[error("No global window")]
    NoWindow,

    #[error("No document on window")]
    NoDocument,

    #[error("Missing element #{0}")]
    MissingElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl MountError {
    /// Wrap a JavaScript exception.
    pub fn dom(err: JsValue) -> Self {
        MountError::Dom(describe(&err))
    }
}

/// Best-effort text for a thrown JavaScript value.
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
