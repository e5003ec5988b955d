//! Console appender implementation

use crate::core::{Appender, LogEntry, Rendered, Result};
use colored::Colorize;
use std::io::{self, Stdout, Write};

/// Writes rendered entries to a console stream.
///
/// Colored segments go through `colored`, which closes every colored run with
/// a reset, so the terminal is back to its original color before the next
/// segment. Whether escapes are emitted at all follows
/// `colored::control::SHOULD_COLORIZE` (`NO_COLOR`, `CLICOLOR`,
/// `CLICOLOR_FORCE`, terminal detection, or `set_override`).
pub struct ConsoleAppender<W: Write + Send = Stdout> {
    writer: W,
    ansi: bool,
}

impl ConsoleAppender<Stdout> {
    /// Standard output, colored when `colored` decides the console supports it
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
            ansi: colored::control::SHOULD_COLORIZE.should_colorize(),
        }
    }
}

impl<W: Write + Send> ConsoleAppender<W> {
    /// Any writer; color hints are honored as far as `colored` allows
    pub fn new(writer: W) -> Self {
        Self { writer, ansi: true }
    }

    /// Ignore color hints for this appender regardless of the global setting
    #[must_use]
    pub fn with_ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Whether colored segments will carry escape sequences
    pub fn ansi(&self) -> bool {
        self.ansi && colored::control::SHOULD_COLORIZE.should_colorize()
    }
}

impl Default for ConsoleAppender<Stdout> {
    fn default() -> Self {
        Self::stdout()
    }
}

impl<W: Write + Send> Appender for ConsoleAppender<W> {
    fn append(&mut self, _entry: &LogEntry, rendered: &Rendered) -> Result<()> {
        for segment in rendered.segments() {
            match segment.color {
                Some(color) if self.ansi => {
                    write!(self.writer, "{}", segment.text.as_str().color(color.ansi()))?;
                }
                _ => self.writer.write_all(segment.text.as_bytes())?,
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appenders::SharedBuffer;
    use crate::core::{ConsoleColor, Formatter, LogLevel, SinkOptions};

    fn write(options: &SinkOptions, ansi: bool, entry: &LogEntry) -> String {
        let buffer = SharedBuffer::new();
        let mut appender = ConsoleAppender::new(buffer.clone()).with_ansi(ansi);
        let rendered = Formatter::new(options).render(entry);
        appender.append(entry, &rendered).expect("append");
        appender.flush().expect("flush");
        buffer.contents()
    }

    #[test]
    fn test_colored_segments_are_reset() {
        colored::control::set_override(true);
        let entry = LogEntry::with_timestamp("ts", LogLevel::Warning, "App", "careful");
        let output = write(&SinkOptions::new(), true, &entry);

        let yellow = ConsoleColor::Yellow.ansi();
        assert_eq!(
            output,
            format!("ts|{}|App|{}\n", "WARN".color(yellow), "careful".color(yellow))
        );
        assert!(output.contains("\x1b[0m|App|"));
        assert!(output.ends_with("\x1b[0m\n"));
    }

    #[test]
    fn test_ansi_disabled_writes_plain_text() {
        colored::control::set_override(true);
        let entry = LogEntry::with_timestamp("ts", LogLevel::Warning, "App", "careful");
        assert_eq!(write(&SinkOptions::new(), false, &entry), "ts|WARN|App|careful\n");
    }

    #[test]
    fn test_name() {
        assert_eq!(ConsoleAppender::new(SharedBuffer::new()).name(), "console");
    }
}
