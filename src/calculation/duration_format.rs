//! Duration formatting.
//!
//! Turns second counts into the `HH:MM` notation used in monthly summaries.

/// Seconds in one hour.
pub const SECONDS_PER_HOUR: i64 = 3600;

/// Formats a signed number of seconds as `[-]HH:MM`.
///
/// Hours and minutes are truncated (never rounded) and zero-padded to at least
/// two digits. Hours are unbounded, so `120:00` is a valid result. A leading
/// `-` is emitted only when `seconds` is negative; the magnitude is formatted
/// from its absolute value.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::format_duration;
///
/// assert_eq!(format_duration(3600), "01:00");
/// assert_eq!(format_duration(-6 * 3600), "-06:00");
/// assert_eq!(format_duration(120 * 3600 + 59), "120:00");
/// assert_eq!(format_duration(0), "00:00");
/// ```
pub fn format_duration(seconds: i64) -> String {
    let sign = if seconds < 0 { "-" } else { "" };
    let magnitude = seconds.unsigned_abs();
    let hours = magnitude / SECONDS_PER_HOUR as u64;
    let minutes = (magnitude / 60) % 60;
    format!("{}{:02}:{:02}", sign, hours, minutes)
}
