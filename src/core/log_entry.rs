//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp::TimestampMode;

/// One immutable log occurrence.
///
/// The header (`{timestamp}|{code}|{category}|`) and the indented message are
/// computed once here so the writer thread only reads finished strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    timestamp: String,
    level: LogLevel,
    category: String,
    message: String,
    header: String,
    indented_message: String,
}

impl LogEntry {
    /// Build an entry stamped with the current time
    pub fn new(
        level: LogLevel,
        category: impl Into<String>,
        message: impl Into<String>,
        mode: TimestampMode,
    ) -> Self {
        Self::with_timestamp(mode.now(), level, category, message)
    }

    /// Build an entry with an already rendered timestamp
    pub fn with_timestamp(
        timestamp: impl Into<String>,
        level: LogLevel,
        category: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        let timestamp = timestamp.into();
        let category = category.into();
        let message = message.into();
        let header = format!("{}|{}|{}|", timestamp, level.code(), category);
        let indented_message = indent_continuation_lines(&message, header.chars().count());

        Self {
            timestamp,
            level,
            category,
            message,
            header,
            indented_message,
        }
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn level(&self) -> LogLevel {
        self.level
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// The message exactly as submitted
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    /// Width of the header in characters
    pub fn header_width(&self) -> usize {
        self.header.chars().count()
    }

    /// The message with continuation lines aligned under the header
    pub fn indented_message(&self) -> &str {
        &self.indented_message
    }

    /// Header followed by the indented message, no trailing line break
    pub fn full_line(&self) -> String {
        format!("{}{}", self.header, self.indented_message)
    }
}

/// Left-pad every line after the first with `width` spaces.
///
/// `\r\n` is normalized to `\n`; messages without a line break are returned
/// unchanged.
pub fn indent_continuation_lines(message: &str, width: usize) -> String {
    if !message.contains('\n') {
        return message.to_string();
    }

    let padding = " ".repeat(width);
    let normalized = message.replace("\r\n", "\n");
    let mut output = String::with_capacity(normalized.len() + padding.len() * 4);

    for (idx, line) in normalized.split('\n').enumerate() {
        if idx > 0 {
            output.push('\n');
            output.push_str(&padding);
        }
        output.push_str(line);
    }

    output
}
