//! Bounded entry queue between callers and the writer thread

use super::log_entry::LogEntry;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use parking_lot::RwLock;

/// Number of entries the queue holds before callers start to block
pub const DEFAULT_QUEUE_CAPACITY: usize = 1024;

/// What happened to an entry handed to [`SinkQueue::enqueue`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enqueued {
    /// Stored immediately
    Accepted,
    /// Stored after waiting for the writer to free capacity
    AcceptedAfterBlocking,
    /// Discarded because the queue was closed
    Dropped,
}

impl Enqueued {
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Enqueued::Dropped)
    }
}

/// Bounded FIFO with blocking-on-full semantics and a one-time close.
///
/// The sending half lives behind a lock only so that `close` can drop it;
/// producers clone it out and never block while holding the lock.
pub struct SinkQueue {
    sender: RwLock<Option<Sender<LogEntry>>>,
    receiver: Receiver<LogEntry>,
    capacity: usize,
}

impl SinkQueue {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_QUEUE_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self {
            sender: RwLock::new(Some(sender)),
            receiver,
            capacity,
        }
    }

    /// Store an entry, waiting while the queue is full.
    ///
    /// Entries offered after [`close`](Self::close) are dropped silently.
    pub fn enqueue(&self, entry: LogEntry) -> Enqueued {
        let sender = match self.sender.read().as_ref() {
            Some(sender) => sender.clone(),
            None => return Enqueued::Dropped,
        };

        match sender.try_send(entry) {
            Ok(()) => Enqueued::Accepted,
            Err(TrySendError::Full(entry)) => match sender.send(entry) {
                Ok(()) => Enqueued::AcceptedAfterBlocking,
                Err(_) => Enqueued::Dropped,
            },
            Err(TrySendError::Disconnected(_)) => Enqueued::Dropped,
        }
    }

    /// Stop accepting entries; queued entries stay available to drain.
    ///
    /// Returns `true` only for the call that actually closed the queue.
    pub fn close(&self) -> bool {
        self.sender.write().take().is_some()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.read().is_none()
    }

    /// Wait for the next entry.
    ///
    /// Returns `None` once the queue is closed and empty.
    pub fn dequeue_blocking(&self) -> Option<LogEntry> {
        self.receiver.recv().ok()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SinkQueue {
    fn default() -> Self {
        Self::new()
    }
}
