use super::{LineWriter, write_terminated};
use crate::destination::Destination;
use std::fmt;
use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Routes lines to a pair of arbitrary writers, one mutex per destination.
///
/// Writes to different destinations never contend with each other; writes to
/// the same destination are serialized so lines stay whole.
pub struct SerializedStreams<O, E> {
    output: Mutex<O>,
    error: Mutex<E>,
}

/// In-memory [`SerializedStreams`] used to observe what a sink emitted.
///
/// # Examples
///
/// ```
/// use logging_sink::{CaptureStreams, Destination, LineWriter};
///
/// let streams = CaptureStreams::new();
/// streams.write_line(Destination::Output, "one").unwrap();
/// streams.write_line(Destination::Output, "two").unwrap();
///
/// assert_eq!(streams.output_text(), "one\ntwo\n");
/// assert!(streams.error_lines().is_empty());
/// ```
pub type CaptureStreams = SerializedStreams<Vec<u8>, Vec<u8>>;

impl<O, E> SerializedStreams<O, E> {
    /// Creates streams from an output writer and an error writer.
    #[must_use]
    pub const fn with_parts(output: O, error: E) -> Self {
        Self {
            output: Mutex::new(output),
            error: Mutex::new(error),
        }
    }

    /// Consumes the streams and returns the output and error writers.
    #[must_use]
    pub fn into_parts(self) -> (O, E) {
        (
            self.output.into_inner().unwrap_or_else(PoisonError::into_inner),
            self.error.into_inner().unwrap_or_else(PoisonError::into_inner),
        )
    }

    fn output(&self) -> MutexGuard<'_, O> {
        self.output.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn error(&self) -> MutexGuard<'_, E> {
        self.error.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<O, E> Default for SerializedStreams<O, E>
where
    O: Default,
    E: Default,
{
    fn default() -> Self {
        Self::with_parts(O::default(), E::default())
    }
}

impl<O, E> fmt::Debug for SerializedStreams<O, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializedStreams").finish_non_exhaustive()
    }
}

impl<O, E> LineWriter for SerializedStreams<O, E>
where
    O: Write + Send,
    E: Write + Send,
{
    fn write_line(&self, destination: Destination, line: &str) -> io::Result<()> {
        match destination {
            Destination::Output => write_terminated(&mut *self.output(), line),
            Destination::Error => write_terminated(&mut *self.error(), line),
        }
    }
}

impl CaptureStreams {
    /// Creates empty in-memory streams.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_parts(Vec::new(), Vec::new())
    }

    /// Returns everything written to [`Destination::Output`] so far.
    #[must_use]
    pub fn output_text(&self) -> String {
        String::from_utf8_lossy(&self.output()).into_owned()
    }

    /// Returns everything written to [`Destination::Error`] so far.
    #[must_use]
    pub fn error_text(&self) -> String {
        String::from_utf8_lossy(&self.error()).into_owned()
    }

    /// Returns the captured output lines without their terminators.
    #[must_use]
    pub fn output_lines(&self) -> Vec<String> {
        self.output_text().lines().map(str::to_owned).collect()
    }

    /// Returns the captured error lines without their terminators.
    #[must_use]
    pub fn error_lines(&self) -> Vec<String> {
        self.error_text().lines().map(str::to_owned).collect()
    }

    /// Discards everything captured so far.
    pub fn clear(&self) {
        self.output().clear();
        self.error().clear();
    }
}
