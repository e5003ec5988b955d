//! Sink metrics for observability
//!
//! Counters for entries moving through the sink, including entries lost
//! because they arrived after shutdown.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters describing sink activity
///
/// # Example
///
/// ```
/// use console_sink::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
/// metrics.record_accepted();
/// metrics.record_written();
///
/// assert_eq!(metrics.accepted(), 1);
/// assert_eq!(metrics.pending(), 0);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Entries stored in the queue
    accepted: AtomicU64,

    /// Entries the appender wrote successfully
    written: AtomicU64,

    /// Entries the appender failed to write (error or panic)
    write_failures: AtomicU64,

    /// Entries discarded because the queue was already closed
    dropped_after_close: AtomicU64,

    /// Enqueue calls that had to wait for free capacity
    blocked: AtomicU64,

    /// Log calls rejected by the level filter or the empty message rule
    filtered: AtomicU64,
}

impl SinkMetrics {
    pub const fn new() -> Self {
        Self {
            accepted: AtomicU64::new(0),
            written: AtomicU64::new(0),
            write_failures: AtomicU64::new(0),
            dropped_after_close: AtomicU64::new(0),
            blocked: AtomicU64::new(0),
            filtered: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn accepted(&self) -> u64 {
        self.accepted.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn written(&self) -> u64 {
        self.written.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn write_failures(&self) -> u64 {
        self.write_failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn dropped_after_close(&self) -> u64 {
        self.dropped_after_close.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn blocked(&self) -> u64 {
        self.blocked.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn filtered(&self) -> u64 {
        self.filtered.load(Ordering::Relaxed)
    }

    /// Entries accepted but not yet handled by the writer
    pub fn pending(&self) -> u64 {
        self.accepted()
            .saturating_sub(self.written() + self.write_failures())
    }

    #[inline]
    pub fn record_accepted(&self) -> u64 {
        self.accepted.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_written(&self) -> u64 {
        self.written.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_write_failure(&self) -> u64 {
        self.write_failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_dropped_after_close(&self) -> u64 {
        self.dropped_after_close.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_blocked(&self) -> u64 {
        self.blocked.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_filtered(&self) -> u64 {
        self.filtered.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for SinkMetrics {
    /// Snapshot of the current counter values
    fn clone(&self) -> Self {
        Self {
            accepted: AtomicU64::new(self.accepted()),
            written: AtomicU64::new(self.written()),
            write_failures: AtomicU64::new(self.write_failures()),
            dropped_after_close: AtomicU64::new(self.dropped_after_close()),
            blocked: AtomicU64::new(self.blocked()),
            filtered: AtomicU64::new(self.filtered()),
        }
    }
}
