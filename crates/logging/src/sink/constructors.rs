use super::LogSink;
use crate::config::SinkConfig;
use crate::timestamp::LocalClock;
use logging_sink::ConsoleStreams;
use std::sync::atomic::{AtomicBool, AtomicU8};

impl LogSink<ConsoleStreams> {
    /// Creates a sink writing to the process `stdout` and `stderr`.
    #[must_use]
    pub fn console() -> Self {
        Self::new(ConsoleStreams::new())
    }
}

impl<W> LogSink<W> {
    /// Creates a sink over `streams` with the default configuration.
    #[must_use]
    pub fn new(streams: W) -> Self {
        Self::with_config(streams, SinkConfig::default())
    }

    /// Creates a sink over `streams` with an explicit configuration.
    #[must_use]
    pub fn with_config(streams: W, config: SinkConfig) -> Self {
        Self::with_parts(streams, config, LocalClock::new())
    }

    /// Creates a sink from every component, including the timestamp clock.
    #[must_use]
    pub const fn with_parts(streams: W, config: SinkConfig, clock: LocalClock) -> Self {
        Self {
            threshold: AtomicU8::new(config.threshold.as_u8()),
            color: AtomicBool::new(config.color),
            clock,
            streams,
        }
    }
}

impl<W> Default for LogSink<W>
where
    W: Default,
{
    fn default() -> Self {
        Self::new(W::default())
    }
}
