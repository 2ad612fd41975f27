use crate::destination::Destination;
use std::io::{self, Write};

mod console;
mod serialized;

pub use console::ConsoleStreams;
pub use serialized::{CaptureStreams, SerializedStreams};

/// Line-oriented output shared between logging threads.
///
/// Implementations write `line` followed by a single `\n` to the stream
/// selected by `destination` and flush before returning. The whole line must
/// reach the stream as one unit with respect to other callers of the same
/// writer.
pub trait LineWriter: Send + Sync {
    /// Writes one newline-terminated line and flushes the destination.
    fn write_line(&self, destination: Destination, line: &str) -> io::Result<()>;
}

impl<T> LineWriter for &T
where
    T: LineWriter + ?Sized,
{
    fn write_line(&self, destination: Destination, line: &str) -> io::Result<()> {
        (**self).write_line(destination, line)
    }
}

impl<T> LineWriter for Box<T>
where
    T: LineWriter + ?Sized,
{
    fn write_line(&self, destination: Destination, line: &str) -> io::Result<()> {
        (**self).write_line(destination, line)
    }
}

impl<T> LineWriter for std::sync::Arc<T>
where
    T: LineWriter + ?Sized,
{
    fn write_line(&self, destination: Destination, line: &str) -> io::Result<()> {
        (**self).write_line(destination, line)
    }
}

fn write_terminated<W>(writer: &mut W, line: &str) -> io::Result<()>
where
    W: Write + ?Sized,
{
    writer.write_all(line.as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()
}
