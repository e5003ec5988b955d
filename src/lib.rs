//! # Console Sink
//!
//! A console log sink that accepts structured entries from many threads and
//! writes them through one background writer, so lines on standard output are
//! never interleaved.
//!
//! ## Features
//!
//! - **Backpressure**: a bounded queue of 1024 entries blocks producers instead
//!   of dropping logs or growing without limit
//! - **Single Writer**: one dedicated thread owns standard output
//! - **Aligned Output**: `{timestamp}|{code}|{category}|` headers with
//!   continuation lines indented under the header
//! - **Colors**: per-level console colors, restored after every segment
//! - **Configuration**: options bound from a JSON document with code overrides

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, SharedBuffer};
    pub use crate::core::{
        Appender, CategoryLogger, ConsoleColor, ConsoleSink, LevelColors, LogEntry, LogLevel,
        Result, SinkBuilder, SinkError, SinkMetrics, SinkOptions, TimestampMode,
    };
}

pub use appenders::{ConsoleAppender, SharedBuffer};
pub use core::{
    Appender, CategoryLogger, ConsoleColor, ConsoleSink, CustomFormatter, Formatter, LevelColors,
    LogEntry, LogLevel, Rendered, Result, Segment, SinkBuilder, SinkError, SinkMetrics,
    SinkOptions, TimestampMode, DEFAULT_QUEUE_CAPACITY,
};
