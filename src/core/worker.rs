//! The single writer thread
//!
//! Exactly one worker exists per sink. It is the only code that calls into the
//! appender, so rendered entries reach the console one at a time.

use super::{
    appender::Appender,
    error::{Result, SinkError},
    formatter::Formatter,
    log_entry::LogEntry,
    metrics::SinkMetrics,
    queue::SinkQueue,
};
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

pub const WORKER_THREAD_NAME: &str = "console-sink-writer";

pub struct WriterWorker {
    handle: thread::JoinHandle<()>,
}

impl WriterWorker {
    /// Start draining `queue` into `appender` on a dedicated thread
    pub fn spawn(
        queue: Arc<SinkQueue>,
        formatter: Formatter,
        mut appender: Box<dyn Appender>,
        metrics: Arc<SinkMetrics>,
    ) -> Result<Self> {
        let handle = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_string())
            .spawn(move || {
                while let Some(entry) = queue.dequeue_blocking() {
                    Self::write_entry(appender.as_mut(), &formatter, &entry, &metrics);

                    // Flush once the backlog is gone rather than per entry
                    if queue.is_empty() {
                        Self::flush(appender.as_mut());
                    }
                }
                Self::flush(appender.as_mut());
            })
            .map_err(|e| SinkError::WorkerSpawn(e.to_string()))?;

        Ok(Self { handle })
    }

    /// Render and write one entry; failures are reported, never propagated.
    fn write_entry(
        appender: &mut dyn Appender,
        formatter: &Formatter,
        entry: &LogEntry,
        metrics: &SinkMetrics,
    ) {
        let result = catch_unwind(AssertUnwindSafe(|| {
            let rendered = formatter.render(entry);
            appender.append(entry, &rendered)
        }));

        match result {
            Ok(Ok(())) => {
                metrics.record_written();
            }
            Ok(Err(e)) => {
                eprintln!("[CONSOLE SINK ERROR] Appender '{}' failed: {}", appender.name(), e);
                metrics.record_write_failure();
            }
            Err(panic_info) => {
                eprintln!(
                    "[CONSOLE SINK CRITICAL] Appender '{}' panicked: {}. Writer continues.",
                    appender.name(),
                    panic_message(panic_info.as_ref())
                );
                metrics.record_write_failure();
            }
        }
    }

    fn flush(appender: &mut dyn Appender) {
        match catch_unwind(AssertUnwindSafe(|| appender.flush())) {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                eprintln!("[CONSOLE SINK ERROR] Appender '{}' flush failed: {}", appender.name(), e);
            }
            Err(panic_info) => {
                eprintln!(
                    "[CONSOLE SINK CRITICAL] Appender '{}' panicked during flush: {}",
                    appender.name(),
                    panic_message(panic_info.as_ref())
                );
            }
        }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the thread to exit after its queue has been closed
    pub fn join(self) -> Result<()> {
        self.handle
            .join()
            .map_err(|panic_info| SinkError::WriterPanicked(panic_message(panic_info.as_ref())))
    }
}

fn panic_message(panic_info: &(dyn Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
