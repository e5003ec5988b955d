//! Sink options and binding from an external configuration document
//!
//! Options are read once when the sink is built and never change afterwards.
//! The configuration document is a hierarchical JSON value; the sink reads the
//! `Logging` → `ConsoleLogger` section:
//!
//! ```json
//! {
//!   "Logging": {
//!     "ConsoleLogger": {
//!       "LogMinLevel": "Information",
//!       "UseUtcTimestamp": "false",
//!       "MultilineFormat": "false",
//!       "IndentMultilineMessages": "true",
//!       "EnableConsoleColors": "true",
//!       "LogLevelColors": { "Information": "Green", "Error": "Red" }
//!     }
//!   }
//! }
//! ```
//!
//! Absent or unparseable values leave the default in place.

use super::color::{ConsoleColor, LevelColors};
use super::error::{Result, SinkError};
use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::timestamp::TimestampMode;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Section path of the sink inside a configuration document
pub const CONFIG_SECTION: [&str; 2] = ["Logging", "ConsoleLogger"];

/// Replaces the built-in renderers; returns the exact line to write
pub type CustomFormatter = Arc<dyn Fn(&LogEntry) -> String + Send + Sync>;

#[derive(Clone)]
pub struct SinkOptions {
    pub min_level: LogLevel,
    pub use_utc_timestamp: bool,
    pub multi_line_format: bool,
    pub indent_multiline_messages: bool,
    pub enable_colors: bool,
    pub level_colors: LevelColors,
    pub custom_formatter: Option<CustomFormatter>,
}

impl Default for SinkOptions {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Trace,
            use_utc_timestamp: false,
            multi_line_format: false,
            indent_multiline_messages: true,
            enable_colors: true,
            level_colors: LevelColors::default(),
            custom_formatter: None,
        }
    }
}

impl fmt::Debug for SinkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkOptions")
            .field("min_level", &self.min_level)
            .field("use_utc_timestamp", &self.use_utc_timestamp)
            .field("multi_line_format", &self.multi_line_format)
            .field("indent_multiline_messages", &self.indent_multiline_messages)
            .field("enable_colors", &self.enable_colors)
            .field("level_colors", &self.level_colors)
            .field("custom_formatter", &self.custom_formatter.is_some())
            .finish()
    }
}

impl SinkOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_min_level(mut self, level: LogLevel) -> Self {
        self.min_level = level;
        self
    }

    #[must_use]
    pub fn with_utc_timestamp(mut self, use_utc: bool) -> Self {
        self.use_utc_timestamp = use_utc;
        self
    }

    #[must_use]
    pub fn with_multi_line_format(mut self, multi_line: bool) -> Self {
        self.multi_line_format = multi_line;
        self
    }

    #[must_use]
    pub fn with_indentation(mut self, indent: bool) -> Self {
        self.indent_multiline_messages = indent;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, enable: bool) -> Self {
        self.enable_colors = enable;
        self
    }

    #[must_use]
    pub fn with_level_colors(mut self, colors: LevelColors) -> Self {
        self.level_colors = colors;
        self
    }

    #[must_use]
    pub fn with_custom_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&LogEntry) -> String + Send + Sync + 'static,
    {
        self.custom_formatter = Some(Arc::new(formatter));
        self
    }

    pub fn timestamp_mode(&self) -> TimestampMode {
        TimestampMode::from_utc_flag(self.use_utc_timestamp)
    }

    /// Check the options before a sink is built
    pub fn validate(&self) -> Result<()> {
        self.level_colors.validate()
    }

    /// Bind options from a configuration document, then apply `configure`.
    ///
    /// Code supplied overrides run after binding and win over the document.
    pub fn from_configuration<F>(document: &Value, configure: F) -> Self
    where
        F: FnOnce(&mut SinkOptions),
    {
        let mut options = Self::default();
        if let Some(section) = config_section(document) {
            options.bind(section);
        }
        configure(&mut options);
        options
    }

    /// Parse a JSON configuration document and bind it
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: Value = serde_json::from_str(json)?;
        if !document.is_object() {
            return Err(SinkError::config(
                "configuration",
                "document root must be an object",
            ));
        }
        Ok(Self::from_configuration(&document, |_| {}))
    }

    fn bind(&mut self, section: &Value) {
        if let Some(level) = read_parsed::<LogLevel>(section, "LogMinLevel") {
            self.min_level = level;
        }
        if let Some(flag) = read_bool(section, "UseUtcTimestamp") {
            self.use_utc_timestamp = flag;
        }
        if let Some(flag) = read_bool(section, "MultilineFormat") {
            self.multi_line_format = flag;
        }
        if let Some(flag) = read_bool(section, "IndentMultilineMessages") {
            self.indent_multiline_messages = flag;
        }
        if let Some(flag) = read_bool(section, "EnableConsoleColors") {
            self.enable_colors = flag;
        }

        if let Some(colors) = lookup(section, "LogLevelColors").and_then(Value::as_object) {
            for (level_name, color_name) in colors {
                let level = level_name.parse::<LogLevel>();
                let color = color_name.as_str().map(str::parse::<ConsoleColor>);
                if let (Ok(level), Some(Ok(color))) = (level, color) {
                    self.level_colors.set(level, color);
                }
            }
        }
    }
}

/// Locate the sink section; keys match case-insensitively
fn config_section(document: &Value) -> Option<&Value> {
    CONFIG_SECTION
        .iter()
        .try_fold(document, |node, key| lookup(node, key))
}

fn lookup<'a>(node: &'a Value, key: &str) -> Option<&'a Value> {
    node.as_object()?
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(key))
        .map(|(_, value)| value)
}

fn read_parsed<T: std::str::FromStr>(section: &Value, key: &str) -> Option<T> {
    let raw = lookup(section, key)?.as_str()?;
    if raw.trim().is_empty() {
        return None;
    }
    raw.parse().ok()
}

fn read_bool(section: &Value, key: &str) -> Option<bool> {
    match lookup(section, key)? {
        Value::Bool(flag) => Some(*flag),
        Value::String(raw) => match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
