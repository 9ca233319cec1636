//! Stress tests for concurrent use of one logger
//!
//! These tests verify:
//! - Concurrent callers never interleave or lose lines
//! - Setters racing with log calls never produce torn output
//! - Derived loggers sharing a sink stay line-atomic

use rust_field_logger::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;

const THREADS: usize = 8;
const CALLS_PER_THREAD: usize = 500;

fn capture() -> (Arc<Logger>, MemoryWriter) {
    let sink = MemoryWriter::new();
    let logger = Logger::builder()
        .output(sink.clone())
        .level(LogLevel::Debug)
        .colored(false)
        .build();
    (Arc::new(logger), sink)
}

/// N threads issuing M calls produce exactly N*M complete lines
#[test]
fn test_concurrent_lines_are_complete() {
    let (logger, sink) = capture();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    logger.info(format_args!("thread={} seq={} end", t, i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * CALLS_PER_THREAD);

    let mut seen = HashSet::new();
    for line in &lines {
        assert!(line.starts_with("[INFO] "), "corrupted line: {:?}", line);
        assert!(line.ends_with(" end"), "corrupted line: {:?}", line);
        assert_eq!(line.matches("[INFO]").count(), 1, "interleaved line: {:?}", line);
        let message = &line[line.find("thread=").expect("message missing")..];
        assert!(seen.insert(message.to_string()), "duplicate line: {:?}", line);
    }
    assert_eq!(logger.metrics().written_count(), (THREADS * CALLS_PER_THREAD) as u64);
}

/// Siblings derived from one logger share its sink without interleaving
#[test]
fn test_derived_loggers_share_sink_safely() {
    let (logger, sink) = capture();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let child = logger.with_field("worker", t);
            thread::spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    child.warn(format_args!("item {}", i));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }

    let lines = sink.lines();
    assert_eq!(lines.len(), THREADS * CALLS_PER_THREAD);
    for t in 0..THREADS {
        let suffix = format!("worker={}", t);
        assert_eq!(
            lines.iter().filter(|line| line.ends_with(&suffix)).count(),
            CALLS_PER_THREAD
        );
    }
}

/// Format and color switches racing with log calls yield whole lines of one kind
#[test]
fn test_setters_race_with_logging() {
    let (logger, sink) = capture();

    let writers: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..CALLS_PER_THREAD {
                    logger.error(format_args!("writer {} call {}", t, i));
                }
            })
        })
        .collect();

    let toggler = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..CALLS_PER_THREAD {
                logger.set_structured(i % 2 == 0);
                logger.set_colored(i % 3 == 0);
                logger.set_level(LogLevel::Debug);
            }
        })
    };

    for handle in writers {
        handle.join().expect("logging thread panicked");
    }
    toggler.join().expect("toggler panicked");

    let lines = sink.lines();
    assert_eq!(lines.len(), 4 * CALLS_PER_THREAD);
    for line in lines {
        if line.starts_with('{') {
            let parsed: serde_json::Value =
                serde_json::from_str(&line).expect("torn JSON line");
            assert_eq!(parsed["level"], "ERROR");
        } else {
            assert!(
                line.starts_with("[ERROR] ") || line.starts_with("\x1b[31m[ERROR]\x1b[0m "),
                "torn text line: {:?}",
                line
            );
        }
    }
}

/// Level changes racing with calls never drop calls at or above both thresholds
#[test]
fn test_level_changes_under_load() {
    let (logger, sink) = capture();

    let caller = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..CALLS_PER_THREAD {
                logger.error(format_args!("always {}", i));
                logger.debug(format_args!("sometimes {}", i));
            }
        })
    };

    let setter = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..CALLS_PER_THREAD {
                let level = if i % 2 == 0 { LogLevel::Warn } else { LogLevel::Debug };
                logger.set_level(level);
            }
        })
    };

    caller.join().expect("caller panicked");
    setter.join().expect("setter panicked");

    let content = sink.contents();
    assert_eq!(content.matches("always").count(), CALLS_PER_THREAD);
    assert!(content.matches("sometimes").count() <= CALLS_PER_THREAD);
}

/// Reconfiguring while calls are in flight never pairs the new sink with the old format
#[test]
fn test_reconfigure_under_load() {
    let (logger, before) = capture();
    let after = MemoryWriter::new();

    let caller = {
        let logger = Arc::clone(&logger);
        thread::spawn(move || {
            for i in 0..CALLS_PER_THREAD {
                logger.info(format_args!("call {}", i));
            }
        })
    };

    thread::yield_now();
    logger.reconfigure(after.clone(), LogLevel::Debug, false, OutputFormat::Json);
    caller.join().expect("caller panicked");

    assert_eq!(before.lines().len() + after.lines().len(), CALLS_PER_THREAD);
    assert!(before.lines().iter().all(|line| line.starts_with("[INFO] ")));
    for line in after.lines() {
        let parsed: serde_json::Value = serde_json::from_str(&line).expect("text line in new sink");
        assert_eq!(parsed["level"], "INFO");
    }
}
