//! crates/logging/src/config.rs
//! Sink settings applied at startup by the embedding program.

use super::levels::Severity;

/// Settings a [`LogSink`](crate::LogSink) can be configured with.
///
/// Nothing in the crate reads the environment or files; programs build a
/// `SinkConfig` from their own command line or configuration and apply it
/// with [`LogSink::apply_config`](crate::LogSink::apply_config).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SinkConfig {
    /// Minimum severity that is emitted.
    pub threshold: Severity,
    /// Whether error-stream lines are wrapped in ANSI color sequences.
    pub color: bool,
}

impl SinkConfig {
    /// Returns the default configuration: `INFO` threshold, color enabled.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            threshold: Severity::Info,
            color: true,
        }
    }

    /// Replaces the threshold.
    #[must_use]
    pub const fn with_threshold(mut self, threshold: Severity) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enables or disables colored error-stream lines.
    #[must_use]
    pub const fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

impl Default for SinkConfig {
    fn default() -> Self {
        Self::new()
    }
}
