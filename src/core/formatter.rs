//! Rendering of entries into console text
//!
//! The formatter is pure: the same entry and options always produce the same
//! segments. Colors are hints attached to segments; the appender decides how
//! (or whether) to apply them.

use super::color::{ConsoleColor, LevelColors};
use super::log_entry::LogEntry;
use super::options::{CustomFormatter, SinkOptions};

/// A run of text drawn in one color, or in the terminal's current color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub color: Option<ConsoleColor>,
}

impl Segment {
    fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }

    fn colored(text: impl Into<String>, color: Option<ConsoleColor>) -> Self {
        Self {
            text: text.into(),
            color,
        }
    }
}

/// The output of rendering one entry, line breaks included
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rendered {
    segments: Vec<Segment>,
}

impl Rendered {
    fn push(&mut self, segment: Segment) {
        if !segment.text.is_empty() {
            self.segments.push(segment);
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The exact text without any color
    pub fn plain(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Renders entries according to the sink options
#[derive(Clone)]
pub struct Formatter {
    multi_line_format: bool,
    indent: bool,
    colors: Option<LevelColors>,
    custom: Option<CustomFormatter>,
}

impl Formatter {
    pub fn new(options: &SinkOptions) -> Self {
        Self {
            multi_line_format: options.multi_line_format,
            indent: options.indent_multiline_messages,
            colors: options.enable_colors.then(|| options.level_colors.clone()),
            custom: options.custom_formatter.clone(),
        }
    }

    pub fn render(&self, entry: &LogEntry) -> Rendered {
        if let Some(custom) = &self.custom {
            let mut rendered = Rendered::default();
            rendered.push(Segment::plain((**custom)(entry)));
            rendered.push(Segment::plain("\n"));
            return rendered;
        }

        if self.multi_line_format {
            self.render_block(entry)
        } else {
            self.render_single_line(entry)
        }
    }

    fn level_color(&self, entry: &LogEntry) -> Option<ConsoleColor> {
        self.colors.as_ref().and_then(|colors| colors.get(entry.level()))
    }

    fn message<'a>(&self, entry: &'a LogEntry) -> &'a str {
        if self.indent {
            entry.indented_message()
        } else {
            entry.message()
        }
    }

    /// `{timestamp}|{code}|{category}|{message}` followed by a line break
    fn render_single_line(&self, entry: &LogEntry) -> Rendered {
        let mut rendered = Rendered::default();

        if self.colors.is_none() {
            rendered.push(Segment::plain(entry.header()));
            rendered.push(Segment::plain(self.message(entry)));
            rendered.push(Segment::plain("\n"));
            return rendered;
        }

        let color = self.level_color(entry);
        rendered.push(Segment::plain(format!("{}|", entry.timestamp())));
        rendered.push(Segment::colored(entry.level().code(), color));
        rendered.push(Segment::plain(format!("|{}|", entry.category())));
        rendered.push(Segment::colored(self.message(entry), color));
        rendered.push(Segment::plain("\n"));
        rendered
    }

    /// `[{timestamp}|{code}|{category}]`, the raw message, then a blank line
    fn render_block(&self, entry: &LogEntry) -> Rendered {
        let color = self.level_color(entry);
        let mut rendered = Rendered::default();

        rendered.push(Segment::plain(format!("[{}|", entry.timestamp())));
        rendered.push(Segment::colored(entry.level().code(), color));
        rendered.push(Segment::plain(format!("|{}]\n", entry.category())));
        rendered.push(Segment::colored(entry.message().replace("\r\n", "\n"), color));
        rendered.push(Segment::plain("\n\n"));
        rendered
    }
}
