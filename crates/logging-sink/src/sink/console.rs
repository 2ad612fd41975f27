use super::{LineWriter, write_terminated};
use crate::destination::Destination;
use std::io;

/// Writes lines to the process `stdout` and `stderr` handles.
///
/// Each call locks the selected standard stream for the duration of the line,
/// which keeps concurrent lines from interleaving. Standard error is
/// unbuffered and standard output is flushed after every line, so output is
/// visible immediately on both destinations.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ConsoleStreams;

impl ConsoleStreams {
    /// Creates a handle to the process standard streams.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl LineWriter for ConsoleStreams {
    fn write_line(&self, destination: Destination, line: &str) -> io::Result<()> {
        match destination {
            Destination::Output => write_terminated(&mut io::stdout().lock(), line),
            Destination::Error => write_terminated(&mut io::stderr().lock(), line),
        }
    }
}
