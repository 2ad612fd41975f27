//! crates/logging/src/format.rs
//! Line assembly and destination routing.

use crate::palette::RESET;
use crate::record::LogRecord;
use logging_sink::Destination;

/// A rendered line together with the stream it must be written to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderedLine {
    destination: Destination,
    text: String,
}

impl RenderedLine {
    /// Returns the stream selected for the line.
    #[must_use]
    pub const fn destination(&self) -> Destination {
        self.destination
    }

    /// Returns the line text, without a trailing newline.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consumes the line and returns its text.
    #[must_use]
    pub fn into_text(self) -> String {
        self.text
    }
}

/// Assembles `<timestamp> [<LABEL>] <message>[ [at <file>:<line>]]`.
///
/// The location suffix is present only for warnings and errors whose record
/// carries a valid location.
///
/// # Examples
///
/// ```
/// use logging::{assemble_line, LogRecord, Severity};
///
/// let record = LogRecord::new(Severity::Error, "x").with_file_line(Some("a.rs"), Some(10));
/// assert_eq!(
///     assemble_line("2024-01-01 00:00:00.000", &record),
///     "2024-01-01 00:00:00.000 [ERROR] x [at a.rs:10]"
/// );
///
/// let record = LogRecord::new(Severity::Info, "x").with_file_line(Some("a.rs"), Some(10));
/// assert_eq!(
///     assemble_line("2024-01-01 00:00:00.000", &record),
///     "2024-01-01 00:00:00.000 [INFO] x"
/// );
/// ```
#[must_use]
pub fn assemble_line(timestamp: &str, record: &LogRecord<'_>) -> String {
    let label = record.severity().label();
    let location = record.rendered_location();

    let suffix_len = location.map_or(0, |location| location.file().len() + 16);
    let mut line =
        String::with_capacity(timestamp.len() + label.len() + record.message().len() + suffix_len + 4);
    line.push_str(timestamp);
    line.push_str(" [");
    line.push_str(label);
    line.push_str("] ");
    line.push_str(record.message());

    if let Some(location) = location {
        line.push_str(" [at ");
        line.push_str(location.file());
        line.push(':');
        line.push_str(&location.line().to_string());
        line.push(']');
    }

    line
}

/// Renders a record and selects its destination.
///
/// Warnings and errors go to [`Destination::Error`], wrapped in the severity
/// color and a trailing reset when `color` is enabled. Everything else goes
/// to [`Destination::Output`] unmodified.
#[must_use]
pub fn render_record(timestamp: &str, record: &LogRecord<'_>, color: bool) -> RenderedLine {
    let line = assemble_line(timestamp, record);
    let severity = record.severity();
    let destination = Destination::for_error_stream(severity.is_error_stream());

    let text = if destination.is_error() && color {
        let prefix = severity.color();
        let mut text = String::with_capacity(prefix.len() + line.len() + RESET.len());
        text.push_str(prefix);
        text.push_str(&line);
        text.push_str(RESET);
        text
    } else {
        line
    };

    RenderedLine { destination, text }
}
