use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

use crate::config::SinkConfig;
use crate::levels::Severity;
use crate::timestamp::LocalClock;
use logging_sink::ConsoleStreams;

mod constructors;
mod emit;
mod guard;

pub use guard::ThresholdGuard;

/// Threshold gate, formatter, and router for log records.
///
/// The sink owns the minimum [`Severity`] as an atomic tag so any thread may
/// read or replace it through a shared reference. Every admitted record is
/// rendered on the calling thread and handed to the sink's
/// [`LineWriter`](logging_sink::LineWriter) as one line; nothing is queued.
///
/// The process-wide instance returned by [`global`](crate::global) writes to
/// the console. Explicit instances over other writers, such as
/// [`CaptureStreams`](logging_sink::CaptureStreams), can be passed around
/// directly.
///
/// # Examples
///
/// ```
/// use logging::{CaptureStreams, LogSink, Severity};
///
/// let sink = LogSink::new(CaptureStreams::new());
/// sink.debug("hidden");
/// sink.info("visible");
/// sink.set_threshold(Severity::Debug);
/// sink.debug("now visible");
///
/// let lines = sink.streams().output_lines();
/// assert_eq!(lines.len(), 2);
/// assert!(lines[0].ends_with("[INFO] visible"));
/// assert!(lines[1].ends_with("[DEBUG] now visible"));
/// ```
pub struct LogSink<W = ConsoleStreams> {
    threshold: AtomicU8,
    color: AtomicBool,
    clock: LocalClock,
    streams: W,
}

impl<W> LogSink<W> {
    /// Returns the current minimum severity.
    #[must_use]
    pub fn threshold(&self) -> Severity {
        Severity::from_u8(self.threshold.load(Ordering::Relaxed)).unwrap_or_default()
    }

    /// Replaces the minimum severity.
    ///
    /// Calls that start after this returns observe the new threshold. A call
    /// already in flight on another thread may be judged against either value.
    pub fn set_threshold(&self, level: Severity) {
        self.threshold.store(level.as_u8(), Ordering::Relaxed);
    }

    /// Reports whether a record of `level` would be emitted right now.
    #[must_use]
    pub fn enabled(&self, level: Severity) -> bool {
        level.as_u8() >= self.threshold.load(Ordering::Relaxed)
    }

    /// Reports whether error-stream lines are color-wrapped.
    #[must_use]
    pub fn color_enabled(&self) -> bool {
        self.color.load(Ordering::Relaxed)
    }

    /// Enables or disables color wrapping of error-stream lines.
    pub fn set_color(&self, color: bool) {
        self.color.store(color, Ordering::Relaxed);
    }

    /// Applies every field of `config`.
    pub fn apply_config(&self, config: SinkConfig) {
        self.set_threshold(config.threshold);
        self.set_color(config.color);
    }

    /// Returns a snapshot of the current settings.
    #[must_use]
    pub fn config(&self) -> SinkConfig {
        SinkConfig::new()
            .with_threshold(self.threshold())
            .with_color(self.color_enabled())
    }

    /// Replaces the threshold until the returned guard is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureStreams, LogSink, Severity};
    ///
    /// let sink = LogSink::new(CaptureStreams::new());
    /// {
    ///     let _quiet = sink.scoped_threshold(Severity::Error);
    ///     assert_eq!(sink.threshold(), Severity::Error);
    /// }
    /// assert_eq!(sink.threshold(), Severity::Info);
    /// ```
    pub fn scoped_threshold(&self, level: Severity) -> ThresholdGuard<'_, W> {
        let previous = self.threshold();
        self.set_threshold(level);
        ThresholdGuard::new(self, previous)
    }

    /// Borrows the line writer.
    #[must_use]
    pub const fn streams(&self) -> &W {
        &self.streams
    }

    /// Returns the clock used for timestamps.
    #[must_use]
    pub const fn clock(&self) -> &LocalClock {
        &self.clock
    }

    /// Consumes the sink and returns the line writer.
    #[must_use]
    pub fn into_streams(self) -> W {
        self.streams
    }
}

impl<W> fmt::Debug for LogSink<W>
where
    W: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogSink")
            .field("threshold", &self.threshold())
            .field("color", &self.color_enabled())
            .field("clock", &self.clock)
            .field("streams", &self.streams)
            .finish()
    }
}
