use super::LogSink;
use crate::format::render_record;
use crate::levels::Severity;
use crate::palette::{CRITICAL_PLAIN_PREFIX, CRITICAL_PREFIX};
use crate::record::{LogRecord, SourceLocation};
use logging_sink::LineWriter;

impl<W> LogSink<W>
where
    W: LineWriter,
{
    /// Emits one record when `level` passes the threshold.
    ///
    /// `file` and `line` are optional; the ` [at file:line]` suffix is shown
    /// only for warnings and errors when `file` is non-empty and `line` is
    /// positive. Write failures are discarded.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureStreams, LogSink, Severity};
    ///
    /// let sink = LogSink::new(CaptureStreams::new());
    /// sink.log(Severity::Error, "x", Some("a.cpp"), Some(10));
    /// sink.log(Severity::Error, "y", None, Some(0));
    ///
    /// let lines = sink.streams().error_lines();
    /// assert!(lines[0].contains("[ERROR] x [at a.cpp:10]"));
    /// assert!(!lines[1].contains("[at "));
    /// ```
    pub fn log(&self, level: Severity, message: &str, file: Option<&str>, line: Option<i64>) {
        self.log_record(&LogRecord::new(level, message).with_file_line(file, line));
    }

    /// Emits a prebuilt record when its severity passes the threshold.
    pub fn log_record(&self, record: &LogRecord<'_>) {
        if !self.enabled(record.severity()) {
            return;
        }

        let timestamp = self.clock.timestamp();
        let rendered = render_record(&timestamp, record, self.color_enabled());
        let _ = self
            .streams
            .write_line(rendered.destination(), rendered.text());
    }

    /// Emits a `DEBUG` record.
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message, None, None);
    }

    /// Emits an `INFO` record.
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message, None, None);
    }

    /// Emits a `WARN` record with an optional call-site location.
    ///
    /// [`log_warn!`](crate::log_warn) supplies the location automatically.
    pub fn warn(&self, message: &str, location: Option<SourceLocation<'_>>) {
        self.log_record(&LogRecord::new(Severity::Warn, message).with_location(location));
    }

    /// Emits an `ERROR` record with an optional call-site location.
    ///
    /// [`log_error!`](crate::log_error) supplies the location automatically.
    pub fn error(&self, message: &str, location: Option<SourceLocation<'_>>) {
        self.log_record(&LogRecord::new(Severity::Error, message).with_location(location));
    }

    /// Emits a record at an arbitrary severity, without location.
    pub fn custom(&self, level: Severity, message: &str) {
        self.log(level, message, None, None);
    }

    /// Emits an `ERROR` record whose message carries a `CRITICAL:` prefix,
    /// bold red unless color is disabled.
    pub fn critical(&self, message: &str, location: Option<SourceLocation<'_>>) {
        if !self.enabled(Severity::Error) {
            return;
        }

        let prefix = if self.color_enabled() {
            CRITICAL_PREFIX
        } else {
            CRITICAL_PLAIN_PREFIX
        };
        let mut prefixed = String::with_capacity(prefix.len() + message.len());
        prefixed.push_str(prefix);
        prefixed.push_str(message);
        self.error(&prefixed, location);
    }

    /// Emits a record only when `predicate` holds.
    pub fn conditional(&self, predicate: bool, level: Severity, message: &str) {
        if predicate {
            self.custom(level, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{RED, RESET, YELLOW};
    use logging_sink::{CaptureStreams, Destination, SerializedStreams};
    use std::io;

    fn capture() -> LogSink<CaptureStreams> {
        LogSink::new(CaptureStreams::new())
    }

    #[test]
    fn records_below_threshold_are_dropped() {
        let sink = capture();
        sink.debug("hidden");
        assert!(sink.streams().output_lines().is_empty());
        assert!(sink.streams().error_lines().is_empty());
    }

    #[test]
    fn info_goes_to_output_without_color() {
        let sink = capture();
        sink.info("hello");
        let lines = sink.streams().output_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with(" [INFO] hello"));
        assert!(!lines[0].contains('\x1b'));
    }

    #[test]
    fn warn_goes_to_error_in_yellow() {
        let sink = capture();
        sink.warn("careful", SourceLocation::from_parts("w.rs", 4));
        let lines = sink.streams().error_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with(YELLOW));
        assert!(lines[0].ends_with(&format!(" [WARN] careful [at w.rs:4]{RESET}")));
    }

    #[test]
    fn error_without_location_has_no_suffix() {
        let sink = capture();
        sink.error("broken", None);
        let lines = sink.streams().error_lines();
        assert!(lines[0].starts_with(RED));
        assert!(lines[0].ends_with(&format!(" [ERROR] broken{RESET}")));
    }

    #[test]
    fn colorless_sink_writes_plain_error_lines() {
        let sink = capture();
        sink.set_color(false);
        sink.error("plain", None);
        let lines = sink.streams().error_lines();
        assert!(!lines[0].contains('\x1b'));
        assert!(lines[0].ends_with(" [ERROR] plain"));
    }

    #[test]
    fn custom_routes_by_level() {
        let sink = capture();
        sink.custom(Severity::Warn, "custom warn");
        sink.custom(Severity::Info, "custom info");
        assert_eq!(sink.streams().error_lines().len(), 1);
        assert_eq!(sink.streams().output_lines().len(), 1);
        assert!(!sink.streams().error_lines()[0].contains("[at "));
    }

    #[test]
    fn critical_prefixes_message_at_error_level() {
        let sink = capture();
        sink.critical("disk gone", SourceLocation::from_parts("c.rs", 9));
        let lines = sink.streams().error_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains(&format!("[ERROR] {CRITICAL_PREFIX}disk gone [at c.rs:9]")));
    }

    #[test]
    fn critical_without_color_has_no_escapes() {
        let sink = capture();
        sink.set_color(false);
        sink.critical("disk gone", None);
        let lines = sink.streams().error_lines();
        assert!(lines[0].ends_with("[ERROR] CRITICAL: disk gone"));
        assert!(!lines[0].contains('\x1b'));
    }

    #[test]
    fn critical_respects_threshold() {
        let sink = LogSink::new(SerializedStreams::<Vec<u8>, Vec<u8>>::default());
        sink.set_threshold(Severity::Error);
        sink.critical("still shown", None);
        let (output, error) = sink.into_streams().into_parts();
        assert!(output.is_empty());
        assert!(!error.is_empty());
    }

    #[test]
    fn conditional_logs_only_when_predicate_holds() {
        let sink = capture();
        let retry_count = 3;
        sink.conditional(retry_count > 5, Severity::Error, "skipped");
        sink.conditional(retry_count > 2, Severity::Error, "retrying");
        let lines = sink.streams().error_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[ERROR] retrying"));
    }

    #[test]
    fn raised_threshold_silences_warnings() {
        let sink = capture();
        sink.warn("before", None);
        sink.set_threshold(Severity::Error);
        sink.warn("after", None);
        let lines = sink.streams().error_lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("before"));
    }

    struct FailingStreams;

    impl LineWriter for FailingStreams {
        fn write_line(&self, _destination: Destination, _line: &str) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn write_failures_are_swallowed() {
        let sink = LogSink::new(FailingStreams);
        sink.info("lost");
        sink.error("lost", None);
    }

    #[test]
    fn log_record_uses_supplied_coordinates() {
        let sink = capture();
        let record = LogRecord::new(Severity::Warn, "raw").with_file_line(Some("r.rs"), Some(-1));
        sink.log_record(&record);
        assert!(!sink.streams().error_lines()[0].contains("[at "));
    }

    #[test]
    fn serialized_streams_accept_arbitrary_writers() {
        let sink = LogSink::new(SerializedStreams::with_parts(io::sink(), Vec::new()));
        sink.info("discarded");
        sink.error("kept", None);
        let (_, error) = sink.into_streams().into_parts();
        assert!(String::from_utf8(error).expect("utf8").contains("kept"));
    }
}
