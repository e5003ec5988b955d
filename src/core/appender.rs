//! Appender trait for the sink's output destination

use super::{error::Result, formatter::Rendered, log_entry::LogEntry};

/// Destination driven by the writer thread.
///
/// Only the writer thread ever calls into the installed appender, so
/// implementations never see two entries concurrently.
pub trait Appender: Send {
    fn append(&mut self, entry: &LogEntry, rendered: &Rendered) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}

impl<A: Appender + ?Sized> Appender for Box<A> {
    fn append(&mut self, entry: &LogEntry, rendered: &Rendered) -> Result<()> {
        (**self).append(entry, rendered)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
