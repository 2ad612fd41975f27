//! crates/logging/src/global.rs
//! Process-wide console sink and free functions that forward to it.

use super::config::SinkConfig;
use super::levels::Severity;
use super::record::{LogRecord, SourceLocation};
use super::sink::LogSink;
use logging_sink::ConsoleStreams;
use std::sync::OnceLock;

static GLOBAL_SINK: OnceLock<LogSink<ConsoleStreams>> = OnceLock::new();

/// Returns the process-wide sink, creating it on first access.
///
/// Concurrent first accesses construct the sink exactly once. The sink lives
/// for the rest of the process and writes to `stdout` and `stderr` with the
/// default configuration until [`apply_config`] or [`set_threshold`] changes
/// it.
pub fn global() -> &'static LogSink<ConsoleStreams> {
    GLOBAL_SINK.get_or_init(LogSink::console)
}

/// Replaces the global threshold.
pub fn set_threshold(level: Severity) {
    global().set_threshold(level);
}

/// Returns the global threshold.
pub fn threshold() -> Severity {
    global().threshold()
}

/// Reports whether the global sink would emit `level`.
pub fn enabled(level: Severity) -> bool {
    global().enabled(level)
}

/// Enables or disables colored error-stream lines on the global sink.
pub fn set_color(color: bool) {
    global().set_color(color);
}

/// Applies `config` to the global sink.
pub fn apply_config(config: SinkConfig) {
    global().apply_config(config);
}

/// Emits one record through the global sink.
pub fn log(level: Severity, message: &str, file: Option<&str>, line: Option<i64>) {
    global().log(level, message, file, line);
}

/// Emits a prebuilt record through the global sink.
pub fn log_record(record: &LogRecord<'_>) {
    global().log_record(record);
}

/// Emits a `DEBUG` record through the global sink.
pub fn debug(message: &str) {
    global().debug(message);
}

/// Emits an `INFO` record through the global sink.
pub fn info(message: &str) {
    global().info(message);
}

/// Emits a `WARN` record through the global sink.
pub fn warn(message: &str, location: Option<SourceLocation<'_>>) {
    global().warn(message, location);
}

/// Emits an `ERROR` record through the global sink.
pub fn error(message: &str, location: Option<SourceLocation<'_>>) {
    global().error(message, location);
}

/// Emits a record at `level` through the global sink.
pub fn custom(level: Severity, message: &str) {
    global().custom(level, message);
}

/// Emits a `CRITICAL:`-prefixed `ERROR` record through the global sink.
pub fn critical(message: &str, location: Option<SourceLocation<'_>>) {
    global().critical(message, location);
}

/// Emits a record through the global sink when `predicate` holds.
pub fn conditional(predicate: bool, level: Severity, message: &str) {
    global().conditional(predicate, level, message);
}
