use std::fmt;

/// Output stream selected for a rendered line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Destination {
    /// The normal output stream (`stdout` for console streams).
    Output,
    /// The error stream (`stderr` for console streams).
    Error,
}

impl Destination {
    /// Selects [`Destination::Error`] when `error_stream` is `true`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging_sink::Destination;
    ///
    /// assert_eq!(Destination::for_error_stream(true), Destination::Error);
    /// assert_eq!(Destination::for_error_stream(false), Destination::Output);
    /// ```
    #[must_use]
    pub const fn for_error_stream(error_stream: bool) -> Self {
        if error_stream {
            Self::Error
        } else {
            Self::Output
        }
    }

    /// Returns the conventional name of the stream.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Output => "stdout",
            Self::Error => "stderr",
        }
    }

    /// Reports whether this is the error stream.
    #[must_use]
    pub const fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
