//! Page configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Relative path of the content document.
pub const DEFAULT_DOCUMENT_PATH: &str = "newsletter_data.json";

/// Recipient for both contact forms and the office hours fallback.
pub const DEFAULT_CONTACT_RECIPIENT: &str = "info@mabaistrategies.com";

/// Log level for structured logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Trace => write!(f, "TRACE"),
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warn => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// JSON format (for log aggregation).
    #[default]
    Json,
    /// Human-readable format (for development).
    Human,
}

/// Stable element identifiers supplied by the page markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MountPoints {
    /// Root container that receives rendered sections.
    pub content: String,
    /// Detail view overlay (the backdrop).
    pub modal: String,
    pub modal_close: String,
    pub modal_title: String,
    pub modal_meta: String,
    pub modal_body: String,
    pub modal_predictive: String,
    pub modal_sources: String,
    /// Newsletter signup form (name, email).
    pub subscribe_form: String,
    /// Client inquiry form (name, company, email, details).
    pub client_form: String,
}

impl Default for MountPoints {
    fn default() -> Self {
        Self {
            content: "content".to_string(),
            modal: "modal".to_string(),
            modal_close: "modal-close".to_string(),
            modal_title: "modal-title".to_string(),
            modal_meta: "modal-meta".to_string(),
            modal_body: "modal-body".to_string(),
            modal_predictive: "modal-predictive".to_string(),
            modal_sources: "modal-sources".to_string(),
            subscribe_form: "subscribe-form".to_string(),
            client_form: "client-form".to_string(),
        }
    }
}

impl MountPoints {
    fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("content", &self.content),
            ("modal", &self.modal),
            ("modal_close", &self.modal_close),
            ("modal_title", &self.modal_title),
            ("modal_meta", &self.modal_meta),
            ("modal_body", &self.modal_body),
            ("modal_predictive", &self.modal_predictive),
            ("modal_sources", &self.modal_sources),
            ("subscribe_form", &self.subscribe_form),
            ("client_form", &self.client_form),
        ]
    }
}

/// Configuration for the newsletter page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Same-origin path of the content document.
    pub document_path: String,
    /// Recipient for contact forms.
    pub contact_recipient: String,
    /// Element identifiers.
    pub mount: MountPoints,
    /// Minimum log level.
    pub log_level: LogLevel,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            document_path: DEFAULT_DOCUMENT_PATH.to_string(),
            contact_recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
            mount: MountPoints::default(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Json,
        }
    }
}

impl PageConfig {
    /// Parse a configuration from JSON. Missing keys take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.document_path.trim().is_empty() {
            return Err(invalid("document_path", "must not be empty"));
        }
        if self.contact_recipient.trim().is_empty() {
            return Err(invalid("contact_recipient", "must not be empty"));
        }
        for (field, id) in self.mount.entries() {
            if id.trim().is_empty() {
                return Err(invalid(&format!("mount.{}", field), "must not be empty"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::Invalid {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_config_default() {
        let config = PageConfig::default();

        assert_eq!(config.document_path, "newsletter_data.json");
        assert_eq!(config.contact_recipient, "info@mabaistrategies.com");
        assert_eq!(config.mount.content, "content");
        assert_eq!(config.mount.modal_sources, "modal-sources");
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.log_format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_full() {
        let config = PageConfig::from_json(
            r#"{
                "document_path": "data/issue-12.json",
                "contact_recipient": "desk@example.com",
                "log_level": "debug",
                "log_format": "human"
            }"#,
        )
        .unwrap();

        assert_eq!(config.document_path, "data/issue-12.json");
        assert_eq!(config.contact_recipient, "desk@example.com");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.log_format, LogFormat::Human);
    }

    #[test]
    fn test_from_json_partial() {
        let config = PageConfig::from_json(
            r#"{
                "document_path": "issue.json",
                "mount": { "content": "main" },
                "log_level": "warn"
            }"#,
        )
        .unwrap();

        assert_eq!(config.document_path, "issue.json");
        assert_eq!(config.mount.content, "main");
        assert_eq!(config.mount.modal, "modal");
        assert_eq!(config.log_level, LogLevel::Warn);
        assert_eq!(config.contact_recipient, DEFAULT_CONTACT_RECIPIENT);
    }

    #[test]
    fn test_from_json_rejects_blank_mount() {
        let err = PageConfig::from_json(r#"{ "mount": { "modal_title": "" } }"#).unwrap_err();
        assert!(err.to_string().contains("mount.modal_title"));
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            PageConfig::from_json("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Error > LogLevel::Warn);
        assert_eq!(LogLevel::Warn.to_string(), "WARN");
    }
}
