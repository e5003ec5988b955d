//! Console sink: queue, writer thread and category registry

use super::{
    appender::Appender,
    color::ConsoleColor,
    error::Result,
    formatter::Formatter,
    log_entry::LogEntry,
    log_level::LogLevel,
    logger::CategoryLogger,
    metrics::SinkMetrics,
    options::SinkOptions,
    queue::{Enqueued, SinkQueue},
    registry::CategoryRegistry,
    timestamp::TimestampMode,
    worker::WriterWorker,
};
use crate::appenders::ConsoleAppender;
use parking_lot::Mutex;
use std::sync::Arc;

/// State shared between the sink and every logger handle
pub(crate) struct SinkShared {
    queue: Arc<SinkQueue>,
    metrics: Arc<SinkMetrics>,
    min_level: LogLevel,
    timestamp_mode: TimestampMode,
}

impl SinkShared {
    pub(crate) fn min_level(&self) -> LogLevel {
        self.min_level
    }

    pub(crate) fn timestamp_mode(&self) -> TimestampMode {
        self.timestamp_mode
    }

    pub(crate) fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }

    pub(crate) fn submit(&self, entry: LogEntry) {
        if entry.level() < self.min_level {
            self.metrics.record_filtered();
            return;
        }

        match self.queue.enqueue(entry) {
            Enqueued::Accepted => {
                self.metrics.record_accepted();
            }
            Enqueued::AcceptedAfterBlocking => {
                self.metrics.record_blocked();
                self.metrics.record_accepted();
            }
            Enqueued::Dropped => {
                self.metrics.record_dropped_after_close();
            }
        }
    }
}

/// Console log sink.
///
/// Accepts entries from any number of threads and writes them through a
/// single background writer, so console output is never interleaved.
///
/// # Example
///
/// ```no_run
/// use console_sink::prelude::*;
///
/// let sink = ConsoleSink::new(SinkOptions::new().with_min_level(LogLevel::Information))?;
/// let logger = sink.get_logger("App")?;
/// logger.info("Hello");
/// sink.shutdown();
/// # Ok::<(), console_sink::SinkError>(())
/// ```
pub struct ConsoleSink {
    shared: Arc<SinkShared>,
    registry: CategoryRegistry<CategoryLogger>,
    worker: Mutex<Option<WriterWorker>>,
    options: SinkOptions,
}

impl ConsoleSink {
    /// Build a sink writing to standard output
    pub fn new(options: SinkOptions) -> Result<Self> {
        Self::with_appender(options, ConsoleAppender::stdout())
    }

    /// Build a sink writing to `appender` instead of standard output
    pub fn with_appender<A: Appender + 'static>(options: SinkOptions, appender: A) -> Result<Self> {
        options.validate()?;

        let queue = Arc::new(SinkQueue::new());
        let metrics = Arc::new(SinkMetrics::new());
        let worker = WriterWorker::spawn(
            Arc::clone(&queue),
            Formatter::new(&options),
            Box::new(appender),
            Arc::clone(&metrics),
        )?;

        let shared = Arc::new(SinkShared {
            queue,
            metrics,
            min_level: options.min_level,
            timestamp_mode: options.timestamp_mode(),
        });

        Ok(Self {
            shared,
            registry: CategoryRegistry::new(),
            worker: Mutex::new(Some(worker)),
            options,
        })
    }

    #[must_use]
    pub fn builder() -> SinkBuilder {
        SinkBuilder::new()
    }

    /// Handle for `category`, created on first use.
    ///
    /// Lookup ignores case. Fails for empty or whitespace-only names.
    pub fn get_logger(&self, category: &str) -> Result<Arc<CategoryLogger>> {
        self.registry
            .get_or_create(category, |name| CategoryLogger::new(Arc::clone(&self.shared), name))
    }

    /// Queue a prebuilt entry.
    ///
    /// Blocks while the queue is full. Entries below the minimum level, or
    /// submitted after [`shutdown`](Self::shutdown), are dropped silently.
    pub fn submit(&self, entry: LogEntry) {
        self.shared.submit(entry);
    }

    /// Close the queue, wait for the writer to drain it, then release handles.
    ///
    /// Every entry accepted before this call is written before it returns.
    /// Calling it again has no further effect. Concurrent callers wait until
    /// the drain started by the first caller has finished.
    pub fn shutdown(&self) {
        self.shared.queue.close();

        // Held across the join so no caller returns before the drain ends
        let mut slot = self.worker.lock();
        if let Some(worker) = slot.take() {
            if let Err(e) = worker.join() {
                eprintln!("[CONSOLE SINK ERROR] {}", e);
            }

            let failures = self.shared.metrics.write_failures();
            if failures > 0 {
                eprintln!(
                    "[CONSOLE SINK WARNING] Sink shut down with {} entries that failed to write",
                    failures
                );
            }
        }

        self.registry.clear();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shared.queue.is_closed()
    }

    pub fn min_level(&self) -> LogLevel {
        self.shared.min_level
    }

    pub fn options(&self) -> &SinkOptions {
        &self.options
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.shared.metrics
    }

    /// Number of distinct categories handed out so far
    pub fn logger_count(&self) -> usize {
        self.registry.len()
    }
}

impl Drop for ConsoleSink {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Builder for constructing a [`ConsoleSink`] with a fluent API
///
/// # Example
/// ```no_run
/// use console_sink::prelude::*;
///
/// let sink = ConsoleSink::builder()
///     .min_level(LogLevel::Debug)
///     .utc_timestamp(true)
///     .level_color(LogLevel::Information, ConsoleColor::Cyan)
///     .build()?;
/// # Ok::<(), console_sink::SinkError>(())
/// ```
pub struct SinkBuilder {
    options: SinkOptions,
    appender: Option<Box<dyn Appender>>,
}

impl SinkBuilder {
    pub fn new() -> Self {
        Self {
            options: SinkOptions::default(),
            appender: None,
        }
    }

    /// Start from existing options, e.g. ones bound from configuration
    #[must_use = "builder methods return a new value"]
    pub fn options(mut self, options: SinkOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn min_level(mut self, level: LogLevel) -> Self {
        self.options.min_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn utc_timestamp(mut self, use_utc: bool) -> Self {
        self.options.use_utc_timestamp = use_utc;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn multi_line_format(mut self, multi_line: bool) -> Self {
        self.options.multi_line_format = multi_line;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn indent_multiline_messages(mut self, indent: bool) -> Self {
        self.options.indent_multiline_messages = indent;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn colors(mut self, enable: bool) -> Self {
        self.options.enable_colors = enable;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn level_color(mut self, level: LogLevel, color: ConsoleColor) -> Self {
        self.options.level_colors.set(level, color);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn custom_formatter<F>(mut self, formatter: F) -> Self
    where
        F: Fn(&LogEntry) -> String + Send + Sync + 'static,
    {
        self.options = self.options.with_custom_formatter(formatter);
        self
    }

    /// Write somewhere other than standard output
    #[must_use = "builder methods return a new value"]
    pub fn appender<A: Appender + 'static>(mut self, appender: A) -> Self {
        self.appender = Some(Box::new(appender));
        self
    }

    pub fn build(self) -> Result<ConsoleSink> {
        match self.appender {
            Some(appender) => ConsoleSink::with_appender(self.options, appender),
            None => ConsoleSink::new(self.options),
        }
    }
}

impl Default for SinkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
