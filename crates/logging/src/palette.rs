//! crates/logging/src/palette.rs
//! ANSI escape sequences used to color error-stream lines.

/// Resets all attributes. Also the fallback for unmapped tags.
pub const RESET: &str = "\x1b[0m";
/// Cyan foreground.
pub const CYAN: &str = "\x1b[36m";
/// Yellow foreground.
pub const YELLOW: &str = "\x1b[33m";
/// Red foreground.
pub const RED: &str = "\x1b[31m";
/// Bold red foreground.
pub const BOLD_RED: &str = "\x1b[1;31m";

/// Prefix prepended to the message of a critical record.
pub const CRITICAL_PREFIX: &str = "\x1b[1;31mCRITICAL:\x1b[0m ";
/// Critical prefix used when color is disabled.
pub const CRITICAL_PLAIN_PREFIX: &str = "CRITICAL: ";

// Indexed by severity tag: DEBUG, INFO, WARN, ERROR.
const COLORS: [&str; crate::Severity::COUNT] = [CYAN, RESET, YELLOW, RED];

/// Returns the color for a raw severity tag, or [`RESET`] when the tag does
/// not name a severity.
///
/// # Examples
///
/// ```
/// use logging::{color_for_tag, palette, Severity};
///
/// assert_eq!(color_for_tag(Severity::Warn.as_u8()), palette::YELLOW);
/// assert_eq!(color_for_tag(42), palette::RESET);
/// ```
#[must_use]
pub const fn color_for_tag(tag: u8) -> &'static str {
    let index = tag as usize;
    if index < COLORS.len() {
        COLORS[index]
    } else {
        RESET
    }
}
