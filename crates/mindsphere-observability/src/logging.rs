//! Structured logging with page view context.

use std::collections::BTreeMap;
use std::sync::Arc;

use mindsphere_core::{LogFormat, LogLevel, PageContext, PageViewId};
use serde::Serialize;

use crate::sink::{LogSink, StderrSink};

/// Millisecond clock. The browser supplies `Date.now()`; host loggers run without one.
pub type Clock = fn() -> f64;

/// A structured log entry.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Log level.
    pub level: LogLevel,
    /// Log message.
    pub message: String,
    /// Page view ID for correlation.
    pub view_id: String,
    /// Emitting component (`loader`, `renderer`, `interact`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component: Option<String>,
    /// Additional structured fields.
    #[serde(flatten)]
    pub fields: BTreeMap<String, serde_json::Value>,
    /// Milliseconds since the logger was created, when a clock is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub elapsed_ms: Option<f64>,
}

impl LogEntry {
    /// Format as JSON string.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| self.message.clone())
    }

    /// Format as human-readable string.
    pub fn to_human(&self) -> String {
        let mut s = match &self.component {
            Some(component) => format!("[{}] {}: {}", self.level, component, self.message),
            None => format!("[{}] {}", self.level, self.message),
        };

        if let Some(elapsed) = self.elapsed_ms {
            s.push_str(&format!(" ({:.1}ms)", elapsed));
        }

        if !self.fields.is_empty() {
            s.push_str(" | ");
            let fields: Vec<String> = self
                .fields
                .iter()
                .map(|(k, v)| format!("{}={}", k, v))
                .collect();
            s.push_str(&fields.join(" "));
        }

        s
    }
}

/// Structured logger scoped to one page view.
#[derive(Debug, Clone)]
pub struct PageLogger {
    view_id: PageViewId,
    component: Option<String>,
    min_level: LogLevel,
    format: LogFormat,
    sink: Arc<dyn LogSink>,
    clock: Option<Clock>,
    start_ms: f64,
}

impl PageLogger {
    /// Create a logger that writes JSON to stderr at info level.
    pub fn new(view_id: PageViewId) -> Self {
        Self {
            view_id,
            component: None,
            min_level: LogLevel::Info,
            format: LogFormat::Json,
            sink: Arc::new(StderrSink),
            clock: None,
            start_ms: 0.0,
        }
    }

    /// Create a logger using the page context's level and format.
    pub fn from_context(ctx: &PageContext) -> Self {
        Self::new(ctx.view_id.clone())
            .with_min_level(ctx.config.log_level)
            .with_format(ctx.config.log_format)
    }

    /// Derive a logger for a named component sharing sink and settings.
    pub fn for_component(&self, component: impl Into<String>) -> Self {
        let mut logger = self.clone();
        logger.component = Some(component.into());
        logger
    }

    /// Set minimum log level.
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    /// Set output format.
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the output sink.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Attach a clock; elapsed time is measured from this call.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.start_ms = clock();
        self.clock = Some(clock);
        self
    }

    /// Log at debug level.
    pub fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message, BTreeMap::new());
    }

    /// Log at info level.
    pub fn info(&self, message: &str) {
        self.log(LogLevel::Info, message, BTreeMap::new());
    }

    /// Log at warn level.
    pub fn warn(&self, message: &str) {
        self.log(LogLevel::Warn, message, BTreeMap::new());
    }

    /// Log at error level.
    pub fn error(&self, message: &str) {
        self.log(LogLevel::Error, message, BTreeMap::new());
    }

    /// Whether `level` would be written.
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn log(&self, level: LogLevel, message: &str, fields: BTreeMap<String, serde_json::Value>) {
        if !self.enabled(level) {
            return;
        }

        let entry = LogEntry {
            level,
            message: message.to_string(),
            view_id: self.view_id.to_string(),
            component: self.component.clone(),
            fields,
            elapsed_ms: self.clock.map(|now| now() - self.start_ms),
        };

        let output = match self.format {
            LogFormat::Json => entry.to_json(),
            LogFormat::Human => entry.to_human(),
        };

        self.sink.write(level, &output);
    }

    /// Get the page view ID.
    pub fn view_id(&self) -> &PageViewId {
        &self.view_id
    }
}

/// Builder for log entries with fluent API.
pub struct LogBuilder<'a> {
    logger: &'a PageLogger,
    level: LogLevel,
    message: String,
    fields: BTreeMap<String, serde_json::Value>,
}

impl<'a> LogBuilder<'a> {
    /// Create a new log builder.
    pub fn new(logger: &'a PageLogger, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            logger,
            level,
            message: message.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Add a string field.
    pub fn field(mut self, key: &str, value: impl Into<String>) -> Self {
        self.fields
            .insert(key.to_string(), serde_json::json!(value.into()));
        self
    }

    /// Add an integer field.
    pub fn field_u64(mut self, key: &str, value: u64) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Add a boolean field.
    pub fn field_bool(mut self, key: &str, value: bool) -> Self {
        self.fields.insert(key.to_string(), serde_json::json!(value));
        self
    }

    /// Emit the log entry.
    pub fn emit(self) {
        self.logger.log(self.level, &self.message, self.fields);
    }
}

impl PageLogger {
    /// Start building an info log entry.
    pub fn info_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Info, message)
    }

    /// Start building a warn log entry.
    pub fn warn_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Warn, message)
    }

    /// Start building an error log entry.
    pub fn error_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Error, message)
    }

    /// Start building a debug log entry.
    pub fn debug_builder(&self, message: impl Into<String>) -> LogBuilder<'_> {
        LogBuilder::new(self, LogLevel::Debug, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use mindsphere_core::PageConfig;

    fn memory_logger() -> (PageLogger, MemorySink) {
        let sink = MemorySink::new();
        let logger =
            PageLogger::new(PageViewId::from_string("view-1")).with_sink(Arc::new(sink.clone()));
        (logger, sink)
    }

    #[test]
    fn test_json_entry() {
        let (logger, sink) = memory_logger();
        logger.for_component("loader").info("document loaded");

        let lines = sink.lines();
        assert_eq!(lines.len(), 1);
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "document loaded");
        assert_eq!(value["view_id"], "view-1");
        assert_eq!(value["component"], "loader");
        assert!(value.get("elapsed_ms").is_none());
    }

    #[test]
    fn test_min_level_filters() {
        let (logger, sink) = memory_logger();
        logger.debug("hidden");
        logger.warn("shown");

        assert_eq!(sink.lines().len(), 1);
        assert!(sink.contains("shown"));
        assert!(!sink.contains("hidden"));
    }

    #[test]
    fn test_builder_fields() {
        let (logger, sink) = memory_logger();
        logger
            .info_builder("rendered")
            .field("section", "scoreboard")
            .field_u64("rows", 3)
            .field_bool("commentary", false)
            .emit();

        let value: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(value["section"], "scoreboard");
        assert_eq!(value["rows"], 3);
        assert_eq!(value["commentary"], false);
    }

    #[test]
    fn test_human_format() {
        let (logger, sink) = memory_logger();
        let logger = logger.with_format(LogFormat::Human).for_component("renderer");
        logger.info_builder("section").field_u64("cards", 2).emit();

        assert_eq!(sink.lines()[0], "[INFO] renderer: section | cards=2");
    }

    #[test]
    fn test_clock_elapsed() {
        fn fixed() -> f64 {
            42.0
        }
        let (logger, sink) = memory_logger();
        logger.with_clock(fixed).error("boom");

        let value: serde_json::Value = serde_json::from_str(&sink.lines()[0]).unwrap();
        assert_eq!(value["elapsed_ms"], 0.0);
    }

    #[test]
    fn test_from_context() {
        let config = PageConfig {
            log_level: LogLevel::Error,
            ..PageConfig::default()
        };
        let ctx = PageContext::new(PageViewId::from_string("v"), config);
        let logger = PageLogger::from_context(&ctx);

        assert!(!logger.enabled(LogLevel::Warn));
        assert!(logger.enabled(LogLevel::Error));
        assert_eq!(logger.view_id().0, "v");
    }
}
