//! Load error types.

use http::StatusCode;
use mindsphere_core::ValidationError;

/// Error type for document loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Network error fetching {path}: {reason}")]
    Network { path: String, reason: String },

    #[error("HTTP error: {status} for {path}")]
    Status { status: StatusCode, path: String },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid document {path}: {source}")]
    Invalid {
        path: String,
        #[source]
        source: ValidationError,
    },
}

impl LoadError {
    /// Transport-level failure (network or non-2xx status).
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network { .. } | Self::Status { .. })
    }

    /// The body arrived but is not a usable document.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::Invalid { .. })
    }

    /// Short machine-readable kind for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Network { .. } => "network",
            Self::Status { .. } => "status",
            Self::Parse { .. } => "parse",
            Self::Invalid { .. } => "invalid",
        }
    }
}
