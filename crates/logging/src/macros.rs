//! crates/logging/src/macros.rs
//! Call-site macros with `format!` arguments.
//!
//! Every macro targets the [global](crate::global) sink unless a leading
//! `sink: <expr>;` names another one. The expression is borrowed, so owned
//! sinks, references, and [`ThresholdGuard`](crate::ThresholdGuard)s all work.
//! Message arguments are only formatted once the threshold admits the record.

/// Emits a `DEBUG` record.
///
/// # Examples
///
/// ```
/// use logging::{log_debug, CaptureStreams, LogSink, Severity};
///
/// let sink = LogSink::new(CaptureStreams::new());
/// sink.set_threshold(Severity::Debug);
/// log_debug!(sink: sink; "cache size {}", 42);
/// assert!(sink.streams().output_lines()[0].ends_with("[DEBUG] cache size 42"));
/// ```
#[macro_export]
macro_rules! log_debug {
    (sink: $sink:expr; $($arg:tt)+) => {{
        let sink = &$sink;
        if sink.enabled($crate::Severity::Debug) {
            sink.debug(&::std::format!($($arg)+));
        }
    }};
    ($($arg:tt)+) => {
        $crate::log_debug!(sink: $crate::global(); $($arg)+)
    };
}

/// Emits an `INFO` record.
#[macro_export]
macro_rules! log_info {
    (sink: $sink:expr; $($arg:tt)+) => {{
        let sink = &$sink;
        if sink.enabled($crate::Severity::Info) {
            sink.info(&::std::format!($($arg)+));
        }
    }};
    ($($arg:tt)+) => {
        $crate::log_info!(sink: $crate::global(); $($arg)+)
    };
}

/// Emits a `WARN` record tagged with the invoking file and line.
///
/// # Examples
///
/// ```
/// use logging::{log_warn, CaptureStreams, LogSink};
///
/// let sink = LogSink::new(CaptureStreams::new());
/// log_warn!(sink: sink; "disk at {}%", 91);
/// let line = &sink.streams().error_lines()[0];
/// assert!(line.contains("[WARN] disk at 91% [at "));
/// ```
#[macro_export]
macro_rules! log_warn {
    (sink: $sink:expr; $($arg:tt)+) => {{
        let sink = &$sink;
        if sink.enabled($crate::Severity::Warn) {
            sink.warn(&::std::format!($($arg)+), $crate::source_location!());
        }
    }};
    ($($arg:tt)+) => {
        $crate::log_warn!(sink: $crate::global(); $($arg)+)
    };
}

/// Emits an `ERROR` record tagged with the invoking file and line.
#[macro_export]
macro_rules! log_error {
    (sink: $sink:expr; $($arg:tt)+) => {{
        let sink = &$sink;
        if sink.enabled($crate::Severity::Error) {
            sink.error(&::std::format!($($arg)+), $crate::source_location!());
        }
    }};
    ($($arg:tt)+) => {
        $crate::log_error!(sink: $crate::global(); $($arg)+)
    };
}

/// Emits a record at a caller-chosen severity, without location.
#[macro_export]
macro_rules! log_custom {
    (sink: $sink:expr; $level:expr, $($arg:tt)+) => {{
        let sink = &$sink;
        let level: $crate::Severity = $level;
        if sink.enabled(level) {
            sink.custom(level, &::std::format!($($arg)+));
        }
    }};
    ($level:expr, $($arg:tt)+) => {
        $crate::log_custom!(sink: $crate::global(); $level, $($arg)+)
    };
}

/// Emits a `CRITICAL:`-prefixed `ERROR` record tagged with the invoking file
/// and line.
#[macro_export]
macro_rules! log_critical {
    (sink: $sink:expr; $($arg:tt)+) => {{
        let sink = &$sink;
        if sink.enabled($crate::Severity::Error) {
            sink.critical(&::std::format!($($arg)+), $crate::source_location!());
        }
    }};
    ($($arg:tt)+) => {
        $crate::log_critical!(sink: $crate::global(); $($arg)+)
    };
}

/// Emits a record only when the condition holds.
///
/// Neither the level nor the message is evaluated when the condition is
/// false.
///
/// # Examples
///
/// ```
/// use logging::{log_if, CaptureStreams, LogSink, Severity};
///
/// let sink = LogSink::new(CaptureStreams::new());
/// let retry_count = 3;
/// log_if!(sink: sink; retry_count > 5, Severity::Error, "never");
/// log_if!(sink: sink; retry_count > 2, Severity::Error, "retry {retry_count}");
/// assert_eq!(sink.streams().error_lines().len(), 1);
/// ```
#[macro_export]
macro_rules! log_if {
    (sink: $sink:expr; $cond:expr, $level:expr, $($arg:tt)+) => {{
        if $cond {
            $crate::log_custom!(sink: $sink; $level, $($arg)+);
        }
    }};
    ($cond:expr, $level:expr, $($arg:tt)+) => {
        $crate::log_if!(sink: $crate::global(); $cond, $level, $($arg)+)
    };
}
