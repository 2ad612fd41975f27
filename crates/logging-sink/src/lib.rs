#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/logging-sink/src/lib.rs
//!
//! # Overview
//!
//! `logging-sink` provides the line destinations used by the `logging` crate.
//! A rendered log line is handed to a [`LineWriter`] together with the
//! [`Destination`] selected by its severity; the writer appends the newline
//! terminator and flushes immediately so every line becomes visible as soon as
//! it is emitted.
//!
//! # Design
//!
//! - [`ConsoleStreams`] targets the process `stdout`/`stderr` handles. Each
//!   write holds the stream's lock for the duration of the line, so concurrent
//!   callers never interleave partial lines.
//! - [`SerializedStreams`] wraps an arbitrary pair of [`std::io::Write`]
//!   implementors, each guarded by its own mutex.
//! - [`CaptureStreams`] is a [`SerializedStreams`] over in-memory buffers with
//!   helpers for reading back the captured lines.
//!
//! # Invariants
//!
//! - Every successful [`LineWriter::write_line`] call produces exactly one
//!   newline-terminated line on exactly one destination.
//! - Writers are flushed after each line; nothing is batched.
//! - A poisoned stream lock is recovered rather than propagated, so a panic on
//!   one logging thread never silences the others.
//!
//! # Errors
//!
//! [`LineWriter::write_line`] surfaces the [`std::io::Error`] reported by the
//! underlying writer. Callers that treat logging as best-effort discard it.
//!
//! # Examples
//!
//! ```
//! use logging_sink::{CaptureStreams, Destination, LineWriter};
//!
//! let streams = CaptureStreams::new();
//! streams.write_line(Destination::Output, "ready").unwrap();
//! streams.write_line(Destination::Error, "disk almost full").unwrap();
//!
//! assert_eq!(streams.output_lines(), vec!["ready".to_owned()]);
//! assert_eq!(streams.error_lines(), vec!["disk almost full".to_owned()]);
//! ```
//!
//! # See also
//!
//! - `logging` crate for severities, formatting, and the process-wide sink.

mod destination;
mod sink;

pub use destination::Destination;
pub use sink::{CaptureStreams, ConsoleStreams, LineWriter, SerializedStreams};
