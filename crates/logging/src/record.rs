//! crates/logging/src/record.rs
//! Per-call record and source location types.

use crate::levels::Severity;
use std::fmt;

/// A validated `file:line` pair identifying a call site.
///
/// Construction rejects an empty file name and non-positive line numbers, so a
/// `SourceLocation` value always renders a meaningful suffix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct SourceLocation<'a> {
    file: &'a str,
    line: u32,
}

impl<'a> SourceLocation<'a> {
    /// Builds a location, returning `None` when `file` is empty or `line` is
    /// not a positive value that fits in a `u32`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::SourceLocation;
    ///
    /// let location = SourceLocation::from_parts("main.rs", 10).unwrap();
    /// assert_eq!(location.to_string(), "main.rs:10");
    ///
    /// assert!(SourceLocation::from_parts("main.rs", 0).is_none());
    /// assert!(SourceLocation::from_parts("", 10).is_none());
    /// ```
    #[must_use]
    pub fn from_parts(file: &'a str, line: i64) -> Option<Self> {
        if file.is_empty() || line <= 0 {
            return None;
        }
        let line = u32::try_from(line).ok()?;
        Some(Self { file, line })
    }

    /// Returns the file name as captured at the call site.
    #[must_use]
    pub const fn file(&self) -> &'a str {
        self.file
    }

    /// Returns the line number, always greater than zero.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for SourceLocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Captures the current call site as an `Option<SourceLocation<'static>>`.
///
/// # Examples
///
/// ```
/// use logging::source_location;
///
/// let location = source_location!().unwrap();
/// assert!(location.file().ends_with(".rs"));
/// assert!(location.line() > 0);
/// ```
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::from_parts(file!(), i64::from(line!()))
    };
}

/// The data consumed by a single log operation.
///
/// Records are built on the caller's stack and borrowed by the sink for the
/// duration of the call; nothing retains them afterwards. The raw file and
/// line are kept as supplied so [`location`](Self::location) can apply the
/// "unset" rules in one place.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LogRecord<'a> {
    severity: Severity,
    message: &'a str,
    file: Option<&'a str>,
    line: Option<i64>,
}

impl<'a> LogRecord<'a> {
    /// Creates a record without source location.
    #[must_use]
    pub const fn new(severity: Severity, message: &'a str) -> Self {
        Self {
            severity,
            message,
            file: None,
            line: None,
        }
    }

    /// Attaches raw, possibly absent, source coordinates.
    #[must_use]
    pub const fn with_file_line(mut self, file: Option<&'a str>, line: Option<i64>) -> Self {
        self.file = file;
        self.line = line;
        self
    }

    /// Attaches an already validated location, or clears it for `None`.
    #[must_use]
    pub fn with_location(self, location: Option<SourceLocation<'a>>) -> Self {
        match location {
            Some(location) => {
                self.with_file_line(Some(location.file()), Some(i64::from(location.line())))
            }
            None => self.with_file_line(None, None),
        }
    }

    /// Returns the record severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }

    /// Returns the message text.
    #[must_use]
    pub const fn message(&self) -> &'a str {
        self.message
    }

    /// Returns the raw file name, if one was supplied.
    #[must_use]
    pub const fn file(&self) -> Option<&'a str> {
        self.file
    }

    /// Returns the raw line number, if one was supplied.
    #[must_use]
    pub const fn line(&self) -> Option<i64> {
        self.line
    }

    /// Returns the source location when both coordinates are set and valid.
    #[must_use]
    pub fn location(&self) -> Option<SourceLocation<'a>> {
        SourceLocation::from_parts(self.file?, self.line?)
    }

    /// Returns the location to render in the ` [at file:line]` suffix.
    ///
    /// Only records routed to the error stream show their location.
    #[must_use]
    pub fn rendered_location(&self) -> Option<SourceLocation<'a>> {
        if self.severity.is_error_stream() {
            self.location()
        } else {
            None
        }
    }
}
