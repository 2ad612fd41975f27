//! crates/logging/src/tracing_bridge.rs
//! Forwards `tracing` events into a [`LogSink`].
//!
//! [`SinkLayer`] is a `tracing-subscriber` layer that renders each event's
//! `message` field through the sink, so libraries instrumented with the
//! standard `tracing` macros share the sink's threshold, timestamps, colors,
//! and stream routing.
//!
//! # Level mapping
//!
//! | `tracing` | [`Severity`] |
//! |-----------|--------------|
//! | `TRACE`   | `Debug`      |
//! | `DEBUG`   | `Debug`      |
//! | `INFO`    | `Info`       |
//! | `WARN`    | `Warn`       |
//! | `ERROR`   | `Error`      |
//!
//! Event metadata supplies the source location, which the sink only renders
//! for warnings and errors. Only the `message` field is rendered; other
//! fields are ignored.
//!
//! # Usage
//!
//! ```rust,no_run
//! logging::init_tracing().expect("no other subscriber installed");
//! tracing::warn!("retrying upload");
//! ```

use super::levels::Severity;
use super::record::LogRecord;
use super::sink::LogSink;
use logging_sink::{ConsoleStreams, LineWriter};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};

/// A tracing layer that writes events through a [`LogSink`].
///
/// Filtering happens per event against the sink's current threshold, so a
/// threshold change takes effect for `tracing` events immediately.
pub struct SinkLayer<W: 'static = ConsoleStreams> {
    sink: &'static LogSink<W>,
}

impl SinkLayer<ConsoleStreams> {
    /// Creates a layer over the process-wide sink.
    #[must_use]
    pub fn global() -> Self {
        Self::new(crate::global())
    }
}

impl<W: 'static> SinkLayer<W> {
    /// Creates a layer over an explicit sink.
    #[must_use]
    pub const fn new(sink: &'static LogSink<W>) -> Self {
        Self { sink }
    }

    /// Returns the sink events are written to.
    #[must_use]
    pub const fn sink(&self) -> &'static LogSink<W> {
        self.sink
    }

    /// Maps a tracing level onto a [`Severity`].
    #[must_use]
    pub const fn severity_for(level: &Level) -> Severity {
        match *level {
            Level::TRACE | Level::DEBUG => Severity::Debug,
            Level::INFO => Severity::Info,
            Level::WARN => Severity::Warn,
            Level::ERROR => Severity::Error,
        }
    }
}

impl<W> fmt::Debug for SinkLayer<W>
where
    W: fmt::Debug + 'static,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SinkLayer").field("sink", self.sink).finish()
    }
}

impl<S, W> Layer<S> for SinkLayer<W>
where
    S: Subscriber,
    W: LineWriter + 'static,
{
    // `Layer::enabled` is left at its default: interest answered there would
    // be cached per callsite and miss later threshold changes.
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let severity = Self::severity_for(metadata.level());
        if !self.sink.enabled(severity) {
            return;
        }

        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        let message = visitor.finish();

        let record = LogRecord::new(severity, &message)
            .with_file_line(metadata.file(), metadata.line().map(i64::from));
        self.sink.log_record(&record);
    }
}

/// Extracts the `message` field of an event.
#[derive(Default)]
struct MessageVisitor {
    message: Option<String>,
}

impl MessageVisitor {
    fn finish(self) -> String {
        self.message.unwrap_or_default()
    }
}

impl Visit for MessageVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = Some(format!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = Some(value.to_owned());
        }
    }
}

/// Installs a [`SinkLayer`] over the global sink as the process-wide default
/// subscriber.
///
/// Fails when another global subscriber has already been installed.
pub fn init_tracing() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(SinkLayer::global())
        .try_init()
}

/// Like [`init_tracing`], with an additional filter layer in front of the
/// sink, such as `tracing_subscriber::EnvFilter`.
///
/// # Example
///
/// ```rust,no_run
/// use tracing_subscriber::EnvFilter;
///
/// logging::init_tracing_with_filter(EnvFilter::new("my_crate=debug"))
///     .expect("no other subscriber installed");
/// ```
pub fn init_tracing_with_filter<F>(filter: F) -> Result<(), TryInitError>
where
    F: Layer<tracing_subscriber::Registry> + Send + Sync + 'static,
{
    tracing_subscriber::registry()
        .with(filter)
        .with(SinkLayer::global())
        .try_init()
}
