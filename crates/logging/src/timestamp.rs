//! crates/logging/src/timestamp.rs
//! Local wall-clock timestamps rendered as `YYYY-MM-DD HH:MM:SS.mmm`.

use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// Rendered when formatting fails, which only happens for dates the format
/// cannot represent.
pub const FALLBACK_TIMESTAMP: &str = "1970-01-01 00:00:00.000";

/// Source of local wall-clock time for log lines.
///
/// The local UTC offset is looked up for every reading so daylight-saving
/// transitions are honoured. On platforms where the lookup is refused (the
/// `time` crate refuses while other threads exist on some Unix systems, since
/// the underlying libc conversion is not thread-safe) the offset observed at
/// construction is used instead, and UTC when that is unknown as well. No
/// conversion state is shared between threads.
///
/// [`with_fixed_offset`](Self::with_fixed_offset) pins every reading to one
/// offset without consulting the system.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LocalClock {
    fallback_offset: UtcOffset,
    system_lookup: bool,
}

impl LocalClock {
    /// Creates a clock, resolving the fallback offset once.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fallback_offset(UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC))
    }

    /// Creates a clock with an explicit fallback offset.
    #[must_use]
    pub const fn with_fallback_offset(fallback_offset: UtcOffset) -> Self {
        Self {
            fallback_offset,
            system_lookup: true,
        }
    }

    /// Creates a clock that always reads in `offset`.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::LocalClock;
    /// use time::macros::offset;
    ///
    /// let clock = LocalClock::with_fixed_offset(offset!(+09:00));
    /// assert_eq!(clock.now().offset(), offset!(+09:00));
    /// ```
    #[must_use]
    pub const fn with_fixed_offset(offset: UtcOffset) -> Self {
        Self {
            fallback_offset: offset,
            system_lookup: false,
        }
    }

    /// Returns the offset used when the per-call lookup is refused.
    #[must_use]
    pub const fn fallback_offset(&self) -> UtcOffset {
        self.fallback_offset
    }

    /// Resolves the offset a reading taken at `moment` is rendered in.
    #[must_use]
    pub fn offset_at(&self, moment: OffsetDateTime) -> UtcOffset {
        if self.system_lookup {
            UtcOffset::local_offset_at(moment).unwrap_or(self.fallback_offset)
        } else {
            self.fallback_offset
        }
    }

    /// Reads the current wall-clock time in the local offset.
    #[must_use]
    pub fn now(&self) -> OffsetDateTime {
        let now = OffsetDateTime::now_utc();
        now.to_offset(self.offset_at(now))
    }

    /// Renders the current time with [`format_timestamp`].
    #[must_use]
    pub fn timestamp(&self) -> String {
        format_timestamp(self.now())
    }
}

impl Default for LocalClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders `moment` as `YYYY-MM-DD HH:MM:SS.mmm` in its own offset.
///
/// Milliseconds are truncated, not rounded, and always zero-padded to three
/// digits.
///
/// # Examples
///
/// ```
/// use logging::format_timestamp;
/// use time::macros::datetime;
///
/// let moment = datetime!(2024-03-05 07:08:09.045999 +02:00);
/// assert_eq!(format_timestamp(moment), "2024-03-05 07:08:09.045");
/// ```
#[must_use]
pub fn format_timestamp(moment: OffsetDateTime) -> String {
    moment
        .format(format_description!(
            "[year]-[month padding:zero]-[day padding:zero] [hour padding:zero]:[minute padding:zero]:[second padding:zero].[subsecond digits:3]"
        ))
        .unwrap_or_else(|_| FALLBACK_TIMESTAMP.to_owned())
}
