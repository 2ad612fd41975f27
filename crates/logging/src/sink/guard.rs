use super::LogSink;
use crate::levels::Severity;

/// RAII guard that temporarily overrides a [`LogSink`]'s threshold.
///
/// Instances are created by [`LogSink::scoped_threshold`]. Dropping the guard
/// restores the threshold that was in effect before the override. The guard
/// dereferences to the sink so records can be emitted through it.
#[must_use = "dropping the guard immediately restores the previous threshold"]
pub struct ThresholdGuard<'a, W> {
    sink: &'a LogSink<W>,
    previous: Severity,
    restore: bool,
}

impl<'a, W> ThresholdGuard<'a, W> {
    pub(super) const fn new(sink: &'a LogSink<W>, previous: Severity) -> Self {
        Self {
            sink,
            previous,
            restore: true,
        }
    }

    /// Returns the threshold that will be restored when the guard is dropped.
    #[must_use]
    pub const fn previous_threshold(&self) -> Severity {
        self.previous
    }

    /// Consumes the guard without restoring the previous threshold.
    ///
    /// The override becomes the sink's new baseline.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::{CaptureStreams, LogSink, Severity};
    ///
    /// let sink = LogSink::new(CaptureStreams::new());
    /// sink.scoped_threshold(Severity::Warn).into_inner();
    /// assert_eq!(sink.threshold(), Severity::Warn);
    /// ```
    pub fn into_inner(mut self) -> &'a LogSink<W> {
        self.restore = false;
        self.sink
    }
}

impl<W> Drop for ThresholdGuard<'_, W> {
    fn drop(&mut self) {
        if self.restore {
            self.sink.set_threshold(self.previous);
        }
    }
}

impl<W> std::ops::Deref for ThresholdGuard<'_, W> {
    type Target = LogSink<W>;

    fn deref(&self) -> &Self::Target {
        self.sink
    }
}
