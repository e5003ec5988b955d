//! Stress tests for concurrent producers
//!
//! These tests verify:
//! - Per-thread submission order survives many concurrent producers
//! - Lines from different threads never interleave
//! - Concurrent first use of a category yields one handle
//! - Nothing is lost when producers outrun the writer

use console_sink::prelude::*;
use console_sink::Rendered;
use std::collections::HashMap;
use std::sync::{Arc, Barrier};
use std::thread;
use std::time::Duration;

const TIMESTAMP_WIDTH: usize = 20;

fn buffered_sink(options: SinkOptions) -> (Arc<ConsoleSink>, SharedBuffer) {
    let buffer = SharedBuffer::new();
    let sink = ConsoleSink::with_appender(options, ConsoleAppender::new(buffer.clone()))
        .expect("Failed to create sink");
    (Arc::new(sink), buffer)
}

/// Parse `t{thread}-{seq}` out of a rendered line
fn parse_line(line: &str, category: &str) -> (usize, usize) {
    let rest = &line[TIMESTAMP_WIDTH..];
    let prefix = format!("|INFO|{category}|t");
    let body = rest
        .strip_prefix(prefix.as_str())
        .unwrap_or_else(|| panic!("torn or foreign line: {line:?}"));
    let (thread_id, seq) = body.split_once('-').expect("thread-seq body");
    (
        thread_id.parse().expect("thread id"),
        seq.parse().expect("sequence"),
    )
}

#[test]
fn test_per_thread_order_preserved() {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 500;

    let (sink, buffer) = buffered_sink(SinkOptions::new().with_colors(false));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let sink = Arc::clone(&sink);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                let logger = sink.get_logger("Stress").expect("logger");
                barrier.wait();
                for seq in 0..PER_THREAD {
                    logger.info(format!("t{thread_id}-{seq}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    sink.shutdown();

    let content = buffer.contents();
    let mut next_expected: HashMap<usize, usize> = HashMap::new();
    for line in content.lines() {
        let (thread_id, seq) = parse_line(line, "Stress");
        let expected = next_expected.entry(thread_id).or_insert(0);
        assert_eq!(seq, *expected, "thread {thread_id} out of order");
        *expected += 1;
    }

    assert_eq!(next_expected.len(), THREADS);
    assert!(next_expected.values().all(|&count| count == PER_THREAD));
    assert_eq!(sink.metrics().written(), (THREADS * PER_THREAD) as u64);
}

#[test]
fn test_multiline_entries_never_interleave() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 200;

    let (sink, buffer) = buffered_sink(SinkOptions::new().with_colors(false).with_multi_line_format(true));

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                let logger = sink.get_logger(&format!("Worker{thread_id}")).expect("logger");
                for seq in 0..PER_THREAD {
                    logger.info(format!("first {thread_id}/{seq}\nsecond {thread_id}/{seq}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    sink.shutdown();

    let content = buffer.contents();
    let blocks: Vec<&str> = content.split("\n\n").filter(|b| !b.is_empty()).collect();
    assert_eq!(blocks.len(), THREADS * PER_THREAD);

    for block in blocks {
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 3, "torn block: {block:?}");
        let category = lines[0]
            .rsplit('|')
            .next()
            .and_then(|c| c.strip_suffix(']'))
            .expect("category");
        let thread_id = category.trim_start_matches("Worker");
        let id = lines[1].strip_prefix("first ").expect("first line");
        assert!(id.starts_with(&format!("{thread_id}/")), "{block:?}");
        assert_eq!(lines[2], format!("second {id}"));
    }
}

#[test]
fn test_concurrent_get_logger_single_handle() {
    let (sink, _buffer) = buffered_sink(SinkOptions::new());
    let barrier = Arc::new(Barrier::new(16));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let sink = Arc::clone(&sink);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let name = if i % 2 == 0 { "Shared.Category" } else { "shared.category" };
                sink.get_logger(name).expect("logger")
            })
        })
        .collect();

    let loggers: Vec<Arc<CategoryLogger>> = handles
        .into_iter()
        .map(|h| h.join().expect("Thread panicked"))
        .collect();

    assert!(loggers.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
    assert_eq!(sink.logger_count(), 1);
}

/// Appender slow enough that producers repeatedly hit the queue limit
struct ThrottledAppender {
    inner: ConsoleAppender<SharedBuffer>,
    every: usize,
    seen: usize,
}

impl Appender for ThrottledAppender {
    fn append(&mut self, entry: &LogEntry, rendered: &Rendered) -> Result<()> {
        self.seen += 1;
        if self.seen % self.every == 0 {
            thread::sleep(Duration::from_millis(1));
        }
        self.inner.append(entry, rendered)
    }

    fn flush(&mut self) -> Result<()> {
        self.inner.flush()
    }

    fn name(&self) -> &str {
        "throttled"
    }
}

#[test]
fn test_backpressure_loses_nothing() {
    const THREADS: usize = 4;
    const PER_THREAD: usize = 2_000;

    let buffer = SharedBuffer::new();
    let sink = Arc::new(
        ConsoleSink::builder()
            .colors(false)
            .appender(ThrottledAppender {
                inner: ConsoleAppender::new(buffer.clone()),
                every: 64,
                seen: 0,
            })
            .build()
            .expect("sink"),
    );

    let handles: Vec<_> = (0..THREADS)
        .map(|thread_id| {
            let sink = Arc::clone(&sink);
            thread::spawn(move || {
                let logger = sink.get_logger("Flood").expect("logger");
                for seq in 0..PER_THREAD {
                    logger.info(format!("t{thread_id}-{seq}"));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Thread panicked");
    }
    sink.shutdown();

    let total = (THREADS * PER_THREAD) as u64;
    assert_eq!(buffer.contents().lines().count() as u64, total);
    assert_eq!(sink.metrics().accepted(), total);
    assert_eq!(sink.metrics().written(), total);
    assert_eq!(sink.metrics().dropped_after_close(), 0);
}
