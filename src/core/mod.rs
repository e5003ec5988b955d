//! Core sink types and traits

pub mod appender;
pub mod color;
pub mod error;
pub mod formatter;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod options;
pub mod queue;
pub mod registry;
pub mod sink;
pub mod timestamp;
pub mod worker;

pub use appender::Appender;
pub use color::{ConsoleColor, LevelColors};
pub use error::{Result, SinkError};
pub use formatter::{Formatter, Rendered, Segment};
pub use log_entry::{indent_continuation_lines, LogEntry};
pub use log_level::LogLevel;
pub use logger::CategoryLogger;
pub use metrics::SinkMetrics;
pub use options::{CustomFormatter, SinkOptions, CONFIG_SECTION};
pub use queue::{Enqueued, SinkQueue, DEFAULT_QUEUE_CAPACITY};
pub use registry::CategoryRegistry;
pub use sink::{ConsoleSink, SinkBuilder};
pub use timestamp::{TimestampMode, TIMESTAMP_PATTERN};
pub use worker::WriterWorker;
