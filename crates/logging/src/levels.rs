//! crates/logging/src/levels.rs
//! Severity ordering and the fixed label table.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label rendered for tags that do not name a [`Severity`].
pub const UNKNOWN_LABEL: &str = "UNKNOWN";

const LABELS: [&str; Severity::COUNT] = ["DEBUG", "INFO", "WARN", "ERROR"];

/// Ordered importance of a log record.
///
/// The discriminants are the tags stored in the sink's atomic threshold, so
/// the integer order and the enum order always agree.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Diagnostics useful while developing.
    Debug = 0,
    /// Routine progress. The default threshold.
    #[default]
    Info = 1,
    /// Something unexpected that did not stop the operation.
    Warn = 2,
    /// An operation failed.
    Error = 3,
}

impl Severity {
    /// Number of defined severities.
    pub const COUNT: usize = 4;

    /// Every severity from lowest to highest.
    pub const ALL: [Self; Self::COUNT] = [Self::Debug, Self::Info, Self::Warn, Self::Error];

    /// Returns the raw tag stored for this severity.
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Converts a raw tag back into a severity.
    ///
    /// # Examples
    ///
    /// ```
    /// use logging::Severity;
    ///
    /// assert_eq!(Severity::from_u8(2), Some(Severity::Warn));
    /// assert_eq!(Severity::from_u8(9), None);
    /// ```
    #[must_use]
    pub const fn from_u8(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Debug),
            1 => Some(Self::Info),
            2 => Some(Self::Warn),
            3 => Some(Self::Error),
            _ => None,
        }
    }

    /// Returns the upper-case label rendered between brackets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        label_for_tag(self.as_u8())
    }

    /// Returns the ANSI escape sequence associated with the severity.
    #[must_use]
    pub const fn color(self) -> &'static str {
        crate::palette::color_for_tag(self.as_u8())
    }

    /// Reports whether records of this severity go to the error stream.
    ///
    /// Warnings and errors are routed to the error destination, carry the
    /// source location suffix, and are color-wrapped.
    #[must_use]
    pub const fn is_error_stream(self) -> bool {
        self.as_u8() >= Self::Warn.as_u8()
    }
}

/// Returns the label for a raw severity tag, or [`UNKNOWN_LABEL`].
///
/// # Examples
///
/// ```
/// use logging::{label_for_tag, Severity};
///
/// assert_eq!(label_for_tag(Severity::Error.as_u8()), "ERROR");
/// assert_eq!(label_for_tag(200), "UNKNOWN");
/// ```
#[must_use]
pub const fn label_for_tag(tag: u8) -> &'static str {
    let index = tag as usize;
    if index < LABELS.len() {
        LABELS[index]
    } else {
        UNKNOWN_LABEL
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl From<Severity> for u8 {
    fn from(severity: Severity) -> Self {
        severity.as_u8()
    }
}

impl TryFrom<u8> for Severity {
    type Error = ParseSeverityError;

    fn try_from(tag: u8) -> Result<Self, ParseSeverityError> {
        Self::from_u8(tag).ok_or(ParseSeverityError)
    }
}

/// Error returned when text or a raw tag does not name a [`Severity`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
#[error("unrecognised severity; expected debug, info, warn, or error")]
pub struct ParseSeverityError;

impl FromStr for Severity {
    type Err = ParseSeverityError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();
        if input.eq_ignore_ascii_case("debug") {
            Ok(Self::Debug)
        } else if input.eq_ignore_ascii_case("info") {
            Ok(Self::Info)
        } else if input.eq_ignore_ascii_case("warn") || input.eq_ignore_ascii_case("warning") {
            Ok(Self::Warn)
        } else if input.eq_ignore_ascii_case("error") || input.eq_ignore_ascii_case("err") {
            Ok(Self::Error)
        } else {
            Err(ParseSeverityError)
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Severity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.label().to_ascii_lowercase())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Severity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text = <String as serde::Deserialize>::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_match_fixed_table() {
        assert_eq!(Severity::Debug.label(), "DEBUG");
        assert_eq!(Severity::Info.label(), "INFO");
        assert_eq!(Severity::Warn.label(), "WARN");
        assert_eq!(Severity::Error.label(), "ERROR");
    }

    #[test]
    fn ordering_is_monotonic() {
        assert!(Severity::Debug < Severity::Info);
        assert!(Severity::Info < Severity::Warn);
        assert!(Severity::Warn < Severity::Error);
        for pair in Severity::ALL.windows(2) {
            assert!(pair[0].as_u8() < pair[1].as_u8());
        }
    }

    #[test]
    fn tags_round_trip_for_defined_levels() {
        for severity in Severity::ALL {
            assert_eq!(Severity::from_u8(severity.as_u8()), Some(severity));
            assert_eq!(Severity::try_from(u8::from(severity)), Ok(severity));
        }
    }

    #[test]
    fn out_of_range_tags_fall_back_to_unknown() {
        for tag in [4_u8, 17, 128, u8::MAX] {
            assert_eq!(label_for_tag(tag), UNKNOWN_LABEL);
            assert_eq!(Severity::from_u8(tag), None);
            assert_eq!(Severity::try_from(tag), Err(ParseSeverityError));
        }
    }

    #[test]
    fn default_is_info() {
        assert_eq!(Severity::default(), Severity::Info);
    }

    #[test]
    fn only_warn_and_error_use_error_stream() {
        assert!(!Severity::Debug.is_error_stream());
        assert!(!Severity::Info.is_error_stream());
        assert!(Severity::Warn.is_error_stream());
        assert!(Severity::Error.is_error_stream());
    }

    #[test]
    fn parse_accepts_labels_and_aliases() {
        assert_eq!("debug".parse::<Severity>(), Ok(Severity::Debug));
        assert_eq!("INFO".parse::<Severity>(), Ok(Severity::Info));
        assert_eq!(" Warn ".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("warning".parse::<Severity>(), Ok(Severity::Warn));
        assert_eq!("err".parse::<Severity>(), Ok(Severity::Error));
        assert_eq!("Error".parse::<Severity>(), Ok(Severity::Error));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        assert_eq!("trace".parse::<Severity>(), Err(ParseSeverityError));
        assert_eq!("".parse::<Severity>(), Err(ParseSeverityError));
        assert_eq!(
            ParseSeverityError.to_string(),
            "unrecognised severity; expected debug, info, warn, or error"
        );
    }

    #[test]
    fn display_matches_label() {
        assert_eq!(Severity::Warn.to_string(), "WARN");
        assert_eq!(format!("[{}]", Severity::Error), "[ERROR]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_uses_lowercase_labels() {
        let json = serde_json::to_string(&Severity::Warn).expect("serialize");
        assert_eq!(json, "\"warn\"");
        let parsed: Severity = serde_json::from_str("\"ERROR\"").expect("deserialize");
        assert_eq!(parsed, Severity::Error);
        assert!(serde_json::from_str::<Severity>("\"loud\"").is_err());
    }
}
