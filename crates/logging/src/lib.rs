#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` is a leveled, timestamped, color-coded logger for a single
//! process. Callers hand it a [`Severity`] and a message; the [`LogSink`]
//! compares the severity against its threshold, renders one line, and writes
//! it to standard output or standard error depending on the severity.
//!
//! ```text
//! YYYY-MM-DD HH:MM:SS.mmm [LEVEL] message [at file:line]
//! ```
//!
//! # Design
//!
//! - [`LogSink`] owns an atomic threshold tag, the color flag, a
//!   [`LocalClock`], and a [`LineWriter`]. It is `Sync`; every operation takes
//!   `&self` and runs to completion on the calling thread.
//! - [`global`] returns the process-wide console sink, created on first use.
//!   Free functions such as [`info`] and [`set_threshold`] forward to it.
//! - The `log_*!` macros accept `format!` arguments, capture `file!()` and
//!   `line!()` for warnings and errors, and skip formatting when the record
//!   would be filtered.
//! - With the `tracing` feature, [`SinkLayer`] routes `tracing` events
//!   through a sink.
//!
//! # Invariants
//!
//! - Records below the threshold produce no output.
//! - An admitted record produces exactly one line. `DEBUG` and `INFO` go to
//!   [`Destination::Output`]; `WARN` and `ERROR` go to
//!   [`Destination::Error`], color-wrapped unless color is disabled.
//! - The ` [at file:line]` suffix appears only for warnings and errors whose
//!   file is non-empty and whose line is positive.
//! - Raw severity tags outside the known range render as `UNKNOWN` with the
//!   reset color.
//!
//! # Errors
//!
//! Logging never fails. Write errors reported by the [`LineWriter`] are
//! discarded. [`ParseSeverityError`] is only produced when parsing a
//! severity from text, for example from a command-line flag.
//!
//! # Examples
//!
//! ```
//! use logging::{log_error, log_warn, CaptureStreams, LogSink};
//!
//! let sink = LogSink::new(CaptureStreams::new());
//! sink.debug("a");
//! sink.info("b");
//! log_warn!(sink: sink; "c");
//! log_error!(sink: sink; "d");
//!
//! let streams = sink.streams();
//! assert_eq!(streams.output_lines().len(), 1);
//! assert_eq!(streams.error_lines().len(), 2);
//! assert!(streams.error_lines().iter().all(|line| line.contains(" [at ")));
//! ```
//!
//! # See also
//!
//! - [`logging_sink`] for the destination streams.

mod config;
mod format;
mod global;
mod levels;
mod macros;
pub mod palette;
mod record;
mod sink;
mod timestamp;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use config::SinkConfig;
pub use format::{RenderedLine, assemble_line, render_record};
pub use global::{
    apply_config, conditional, critical, custom, debug, enabled, error, global, info, log,
    log_record, set_color, set_threshold, threshold, warn,
};
pub use levels::{ParseSeverityError, Severity, UNKNOWN_LABEL, label_for_tag};
pub use palette::color_for_tag;
pub use record::{LogRecord, SourceLocation};
pub use sink::{LogSink, ThresholdGuard};
pub use timestamp::{FALLBACK_TIMESTAMP, LocalClock, format_timestamp};
#[cfg(feature = "tracing")]
pub use tracing_bridge::{SinkLayer, init_tracing, init_tracing_with_filter};

pub use logging_sink::{CaptureStreams, ConsoleStreams, Destination, LineWriter, SerializedStreams};
