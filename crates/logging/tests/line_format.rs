//! Integration tests for the rendered line layout.
//!
//! Lines have the shape `YYYY-MM-DD HH:MM:SS.mmm [LEVEL] message` followed by
//! ` [at file:line]` for warnings and errors with a valid location.

use logging::{CaptureStreams, LocalClock, LogSink, Severity, SinkConfig};
use time::macros::{format_description, offset};
use time::{Duration, OffsetDateTime, PrimitiveDateTime, UtcOffset};

const TIMESTAMP_LEN: usize = 23;

fn capture() -> LogSink<CaptureStreams> {
    let sink = LogSink::new(CaptureStreams::new());
    sink.set_color(false);
    sink
}

/// Checks `\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}\.\d{3}`.
fn is_timestamp(text: &str) -> bool {
    const SHAPE: &[u8; TIMESTAMP_LEN] = b"dddd-dd-dd dd:dd:dd.ddd";
    text.len() == TIMESTAMP_LEN
        && text
            .bytes()
            .zip(SHAPE.iter())
            .all(|(byte, shape)| match shape {
                b'd' => byte.is_ascii_digit(),
                literal => byte == *literal,
            })
}

fn parse_timestamp(line: &str) -> PrimitiveDateTime {
    PrimitiveDateTime::parse(
        &line[..TIMESTAMP_LEN],
        format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:3]"),
    )
    .expect("timestamp parses")
}

// ============================================================================
// Timestamp Field
// ============================================================================

/// Verifies the timestamp prefix matches the fixed pattern.
#[test]
fn timestamp_prefix_matches_pattern() {
    let sink = capture();
    sink.info("shape");
    sink.error("shape", None);

    for line in sink
        .streams()
        .output_lines()
        .into_iter()
        .chain(sink.streams().error_lines())
    {
        assert!(is_timestamp(&line[..TIMESTAMP_LEN]), "bad timestamp in {line:?}");
        assert_eq!(&line[TIMESTAMP_LEN..TIMESTAMP_LEN + 2], " [");
    }
}

/// Verifies the timestamp reflects local wall-clock time within one second,
/// measured against a reference taken outside the sink.
#[test]
fn timestamp_tracks_local_wall_clock() {
    let sink = capture();
    sink.info("now");
    let offset = UtcOffset::current_local_offset().unwrap_or(sink.clock().fallback_offset());
    let reference = OffsetDateTime::now_utc().to_offset(offset);

    let parsed = parse_timestamp(&sink.streams().output_lines()[0]);
    let reference = PrimitiveDateTime::new(reference.date(), reference.time());
    assert!((reference - parsed).abs() < Duration::SECOND, "{parsed} vs {reference}");
}

/// Verifies a sink on a fixed non-UTC clock renders that zone's wall-clock
/// fields rather than UTC.
#[test]
fn timestamp_uses_clock_offset() {
    let tokyo = offset!(+09:00);
    let sink = LogSink::with_parts(
        CaptureStreams::new(),
        SinkConfig::new(),
        LocalClock::with_fixed_offset(tokyo),
    );
    sink.info("tokyo");
    let reference = OffsetDateTime::now_utc();

    let parsed = parse_timestamp(&sink.streams().output_lines()[0]);
    let local = reference.to_offset(tokyo);
    let local = PrimitiveDateTime::new(local.date(), local.time());
    let utc = PrimitiveDateTime::new(reference.date(), reference.time());
    assert!((local - parsed).abs() < Duration::SECOND, "{parsed} vs {local}");
    assert!((utc - parsed).abs() > Duration::HOUR, "{parsed} rendered in UTC");
}

// ============================================================================
// Label and Message
// ============================================================================

/// Verifies each severity renders its bracketed label after the timestamp.
#[test]
fn labels_follow_timestamp() {
    let sink = capture();
    sink.set_threshold(Severity::Debug);
    for severity in Severity::ALL {
        sink.custom(severity, "msg");
    }

    let mut lines = sink.streams().output_lines();
    lines.extend(sink.streams().error_lines());
    let labels: Vec<&str> = lines
        .iter()
        .map(|line| &line[TIMESTAMP_LEN + 1..])
        .collect();
    assert_eq!(
        labels,
        ["[DEBUG] msg", "[INFO] msg", "[WARN] msg", "[ERROR] msg"]
    );
}

/// Verifies messages are written verbatim, including an empty one.
#[test]
fn messages_are_verbatim() {
    let sink = capture();
    sink.info("");
    sink.info("percent % and {braces}");

    let lines = sink.streams().output_lines();
    assert!(lines[0].ends_with("[INFO] "));
    assert!(lines[1].ends_with("[INFO] percent % and {braces}"));
}

// ============================================================================
// Location Suffix
// ============================================================================

/// Verifies `log(ERROR, "x", "a.cpp", 10)` carries the suffix.
#[test]
fn error_with_location_has_suffix() {
    let sink = capture();
    sink.log(Severity::Error, "x", Some("a.cpp"), Some(10));
    assert!(sink.streams().error_lines()[0].ends_with("[ERROR] x [at a.cpp:10]"));
}

/// Verifies `log(ERROR, "x", None, 0)` omits the suffix.
#[test]
fn error_without_location_has_no_suffix() {
    let sink = capture();
    sink.log(Severity::Error, "x", None, Some(0));
    assert!(sink.streams().error_lines()[0].ends_with("[ERROR] x"));
}

/// Verifies `log(INFO, "x", "a.cpp", 10)` omits the suffix.
#[test]
fn info_never_has_suffix() {
    let sink = capture();
    sink.log(Severity::Info, "x", Some("a.cpp"), Some(10));
    assert!(sink.streams().output_lines()[0].ends_with("[INFO] x"));
}

/// Verifies empty files and non-positive lines suppress the suffix.
#[test]
fn invalid_locations_suppress_suffix() {
    let sink = capture();
    sink.log(Severity::Warn, "empty", Some(""), Some(5));
    sink.log(Severity::Warn, "zero", Some("a.rs"), Some(0));
    sink.log(Severity::Warn, "negative", Some("a.rs"), Some(-7));
    sink.log(Severity::Warn, "no line", Some("a.rs"), None);

    for line in sink.streams().error_lines() {
        assert!(!line.contains("[at "), "unexpected suffix in {line:?}");
    }
}
