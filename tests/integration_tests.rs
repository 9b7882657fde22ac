//! Integration tests for the logger
//!
//! These tests verify:
//! - Level filtering and one backend call per accepted write
//! - End-to-end rendering with the default configuration
//! - Default format inheritance, timestamp suppression
//! - Backend selection and structured output

use chrono::NaiveDateTime;
use parking_lot::Mutex;
use rust_format_logger::prelude::*;
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    fn lines(&self) -> Vec<String> {
        String::from_utf8_lossy(&self.0.lock())
            .lines()
            .map(String::from)
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts flushes; the console backend flushes once per line written
#[derive(Clone, Default)]
struct FlushCounter(Arc<AtomicUsize>);

impl Write for FlushCounter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }
}

fn structured_capture() -> (SharedBuffer, StructuredOptions) {
    let buffer = SharedBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .without_time()
        .with_max_level(tracing::Level::TRACE)
        .finish();
    (buffer, StructuredOptions::with_subscriber(subscriber))
}

#[test]
fn test_end_to_end_default_format() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(true)
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    logger.write(LogLevel::Info, &["hello".into(), 42.into()]).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    let line = &lines[0];

    let infix_and_body = "\x1b[36mINFO \x1b[39m - hello 42";
    assert!(line.ends_with(infix_and_body), "unexpected line: {:?}", line);

    // The timestamp segment is colored like the level.
    let stamp = line
        .strip_suffix(infix_and_body)
        .and_then(|rest| rest.strip_prefix("\x1b[36m"))
        .and_then(|rest| rest.strip_suffix(" - \x1b[39m"))
        .expect("cyan timestamp segment");
    assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_end_to_end_without_colors() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(false)
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    rust_format_logger::info!(logger, "hello", 42).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].ends_with(" - INFO  - hello 42"));
    assert!(!lines[0].contains('\x1b'));
}

#[test]
fn test_invalid_timestamp_pattern_uses_default() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(false)
        .default_format(
            LevelOptions::new().with_timestamp(TimestampOptions::new().with_custom_pattern("%Q")),
        )
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    logger.info(&["x".into()]).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 1);
    let stamp = lines[0]
        .strip_suffix(" - INFO  - x")
        .expect("default separator and infix");
    assert!(NaiveDateTime::parse_from_str(stamp, "%Y-%m-%d %H:%M:%S").is_ok());
}

#[test]
fn test_levels_below_minimum_never_reach_backend() {
    for min in LogLevel::ALL {
        let flushes = FlushCounter::default();
        let logger = Logger::builder()
            .min_level(min)
            .stdout(flushes.clone())
            .stderr(flushes.clone())
            .build();

        for level in LogLevel::ALL {
            let before = flushes.0.load(Ordering::Relaxed);
            logger.write(level, &["probe".into()]).unwrap();
            let calls = flushes.0.load(Ordering::Relaxed) - before;
            let expected = usize::from(level >= min);
            assert_eq!(calls, expected, "min={} level={}", min, level);
        }
    }
}

#[test]
fn test_disabled_default_timestamp_reaches_overrides() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(false)
        .default_format(LevelOptions::new().without_timestamp())
        .level_format(LogLevel::Info, LevelOptions::new().with_infix("[info] "))
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    assert!(logger.formats().get(LogLevel::Info).timestamp().is_none());
    logger.info(&["hello".into()]).unwrap();
    assert_eq!(out.lines(), vec!["[info] hello"]);
}

#[test]
fn test_disabled_timestamp_leaves_no_orphan_separator() {
    let (out, err) = (SharedBuffer::default(), SharedBuffer::default());
    let logger = Logger::builder()
        .colors(false)
        .min_level(LogLevel::Trace)
        .default_format(LevelOptions::new().without_timestamp())
        .stdout(out.clone())
        .stderr(err.clone())
        .build();

    for level in LogLevel::ALL {
        logger.write(level, &["body".into()]).unwrap();
    }

    let mut lines = out.lines();
    lines.extend(err.lines());
    assert_eq!(lines.len(), 7);
    for line in lines {
        assert!(!line.starts_with(' '));
        assert!(!line.starts_with(" - "));
        assert!(line.ends_with("body"));
    }
}

#[test]
fn test_none_format_serves_as_default() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(false)
        .level_format(
            LogLevel::None,
            LevelOptions::new()
                .with_timestamp(TimestampOptions::new().with_formatter(|_| "[t] ".to_string())),
        )
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    logger.info(&["a".into()]).unwrap();
    logger.write(LogLevel::None, &["b".into()]).unwrap();
    assert_eq!(out.lines(), vec!["[t] INFO  - a", "[t] b"]);
}

#[test]
fn test_multiline_values_stay_on_one_line() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(false)
        .default_format(LevelOptions::new().without_timestamp())
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    let malicious = "User login\nERROR - Fake error injected";
    logger.info(&[malicious.into()]).unwrap();

    let lines = out.lines();
    assert_eq!(lines.len(), 1, "Log should be a single line, not multiple");
    assert_eq!(lines[0], "INFO  - User login\\nERROR - Fake error injected");
}

#[test]
fn test_empty_structured_options_select_structured_backend() {
    let structured = Logger::builder()
        .structured(StructuredOptions::default())
        .handle_errors(false)
        .build();
    assert!(structured.console().is_structured());

    let console = Logger::builder().stdout(io::sink()).stderr(io::sink()).build();
    assert!(!console.console().is_structured());
    assert_eq!(console.console().name(), "console");
}

#[test]
fn test_structured_backend_receives_channel_and_line() {
    let (buffer, options) = structured_capture();
    let logger = Logger::builder()
        .colors(false)
        .structured(options)
        .handle_errors(false)
        .build();

    logger.write(LogLevel::Info, &["hello".into(), 42.into()]).unwrap();
    logger.write(LogLevel::Fatal, &["going down".into()]).unwrap();
    logger.write(LogLevel::None, &["raw".into()]).unwrap();
    logger.debug(&["filtered".into()]).unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("INFO  - hello 42"));
    assert!(lines[0].contains("channel=\"info\""));
    assert!(lines[1].contains("ERROR"));
    assert!(lines[1].contains("FATAL - going down"));
    assert!(lines[1].contains("channel=\"error\""));
    assert!(lines[2].contains("channel=\"log\""));
}

#[test]
fn test_structured_backend_handles_errors_by_default() {
    let logger = Logger::builder()
        .structured(StructuredOptions::new())
        .build();
    match logger.console() {
        Backend::Structured(appender) => assert!(appender.handles_errors()),
        Backend::Console(_) => panic!("expected structured backend"),
    }
}

struct FailingDisplay;

impl std::fmt::Display for FailingDisplay {
    fn fmt(&self, _f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        panic!("display failed")
    }
}

#[test]
fn test_panic_during_foreign_event_is_reported_and_unwinds() {
    let (buffer, options) = structured_capture();
    let _logger = Logger::builder()
        .structured(options)
        .build();

    let result = std::panic::catch_unwind(|| {
        let subscriber = tracing_subscriber::fmt().with_writer(io::sink).finish();
        tracing::subscriber::with_default(subscriber, || tracing::info!("{}", FailingDisplay));
    });

    assert!(result.is_err());
    let text = buffer.lines().join("\n");
    assert!(text.contains("ERROR"));
    assert!(text.contains("uncaught panic"));
    assert!(text.contains("display failed"));
}

#[test]
fn test_inspected_values() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(false)
        .default_format(LevelOptions::new().without_timestamp())
        .depth(1)
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    #[derive(serde::Serialize)]
    struct Request {
        method: &'static str,
        status: u16,
        headers: Vec<(&'static str, &'static str)>,
    }

    let request = Request {
        method: "GET",
        status: 200,
        headers: vec![("accept", "json")],
    };
    logger
        .info(&["request".into(), Value::serialize(&request)])
        .unwrap();

    assert_eq!(
        out.lines(),
        vec!["INFO  - request { headers: [ [Array] ], method: 'GET', status: 200 }"]
    );
}

#[test]
fn test_message_style_is_applied() {
    let out = SharedBuffer::default();
    let logger = Logger::builder()
        .colors(true)
        .default_format(
            LevelOptions::new()
                .without_timestamp()
                .with_message(Style::new().effect(Effect::Underline)),
        )
        .stdout(out.clone())
        .stderr(io::sink())
        .build();

    logger.info(&["styled".into()]).unwrap();
    assert_eq!(
        out.lines(),
        vec!["\x1b[36mINFO \x1b[39m - \x1b[4mstyled\x1b[24m"]
    );
}
