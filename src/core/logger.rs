//! Per-category logger handle

use super::{
    error::Result,
    log_entry::LogEntry,
    log_level::LogLevel,
    registry::validate_category,
    sink::SinkShared,
};
use std::error::Error;
use std::fmt;
use std::sync::Arc;

/// Lightweight handle bound to one category of a [`ConsoleSink`](super::sink::ConsoleSink).
///
/// Handles are created by `ConsoleSink::get_logger` and shared; one exists per
/// category for the lifetime of the sink.
pub struct CategoryLogger {
    sink: Arc<SinkShared>,
    category: String,
}

impl CategoryLogger {
    pub(crate) fn new(sink: Arc<SinkShared>, category: &str) -> Result<Self> {
        validate_category(category)?;
        Ok(Self {
            sink,
            category: category.to_string(),
        })
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    #[inline]
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.sink.min_level()
    }

    /// Log `message` at `level`, appending `error` and its sources on the
    /// following lines.
    ///
    /// Filtered levels return before any entry is built. Messages that are
    /// empty or whitespace only are discarded.
    pub fn log(&self, level: LogLevel, message: impl AsRef<str>, error: Option<&dyn Error>) {
        if !self.is_enabled(level) {
            self.sink.metrics().record_filtered();
            return;
        }

        let message = match error {
            Some(error) => merge_error(message.as_ref(), error),
            None => message.as_ref().to_string(),
        };

        if message.trim().is_empty() {
            self.sink.metrics().record_filtered();
            return;
        }

        let entry = LogEntry::new(level, self.category.as_str(), message, self.sink.timestamp_mode());
        self.sink.submit(entry);
    }

    /// Log an error value at `Error` level
    pub fn log_error(&self, error: &dyn Error) {
        self.log(LogLevel::Error, "", Some(error));
    }

    #[inline]
    pub fn trace(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Trace, message, None);
    }

    #[inline]
    pub fn debug(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Debug, message, None);
    }

    #[inline]
    pub fn info(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Information, message, None);
    }

    #[inline]
    pub fn warning(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Warning, message, None);
    }

    #[inline]
    pub fn error(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Error, message, None);
    }

    #[inline]
    pub fn critical(&self, message: impl AsRef<str>) {
        self.log(LogLevel::Critical, message, None);
    }
}

impl fmt::Debug for CategoryLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CategoryLogger")
            .field("category", &self.category)
            .field("min_level", &self.sink.min_level())
            .finish()
    }
}

/// Append the error and its `source()` chain to the message
pub fn merge_error(message: &str, error: &dyn Error) -> String {
    let mut merged = String::from(message);
    if !merged.is_empty() {
        merged.push('\n');
    }
    merged.push_str(&error.to_string());

    let mut source = error.source();
    while let Some(cause) = source {
        merged.push_str("\nCaused by: ");
        merged.push_str(&cause.to_string());
        source = cause.source();
    }

    merged
}
