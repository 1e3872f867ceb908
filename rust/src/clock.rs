//! Wall-clock minute arithmetic for schedule layout.
//!
//! All times are `chrono::NaiveTime` values on a plain 24-hour clock face:
//! no dates, no timezones. Durations are whole minutes; floating point never
//! enters time math.

use chrono::{Duration, NaiveTime, Timelike};
use thiserror::Error;

/// Integer minutes used throughout the allocator.
pub type Minutes = i64;

/// Errors from parsing wall-clock time strings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    /// Input is not two ':'-separated numeric fields.
    #[error("invalid clock time {0:?}: expected \"HH:MM\"")]
    InvalidFormat(String),
    /// Hour or minute outside the 24-hour clock.
    #[error("clock time {0:?} out of range: hour must be 0-23, minute 0-59")]
    FieldOutOfRange(String),
}

/// Parse a `"HH:MM"` 24-hour clock string.
///
/// Rejects anything that is not two numeric fields separated by a colon;
/// bad input fails rather than falling back to midnight.
pub fn parse_clock_time(s: &str) -> Result<NaiveTime, ClockError> {
    let (hh, mm) = s
        .split_once(':')
        .ok_or_else(|| ClockError::InvalidFormat(s.to_string()))?;
    let hour: u32 = hh
        .parse()
        .map_err(|_| ClockError::InvalidFormat(s.to_string()))?;
    let minute: u32 = mm
        .parse()
        .map_err(|_| ClockError::InvalidFormat(s.to_string()))?;
    NaiveTime::from_hms_opt(hour, minute, 0)
        .ok_or_else(|| ClockError::FieldOutOfRange(s.to_string()))
}

/// Format a clock time as zero-padded 24-hour `"HH:MM"`.
pub fn format_clock_time(time: NaiveTime) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

/// Advance a clock time by whole minutes.
///
/// Wraps across hour boundaries; a walk past 23:59 wraps around midnight on
/// the clock face (schedules are single-day, so no date is carried).
pub fn add_minutes(time: NaiveTime, minutes: Minutes) -> NaiveTime {
    time + Duration::minutes(minutes)
}

/// Minutes from `start` to `end`.
///
/// Negative or zero when `end` is not after `start`; the allocator handles
/// that defensively rather than treating it as an error.
pub fn window_minutes(start: NaiveTime, end: NaiveTime) -> Minutes {
    end.signed_duration_since(start).num_minutes()
}

/// End of a block that starts at `start` and runs for `duration` minutes.
pub fn calculate_end_time(start: NaiveTime, duration: Minutes) -> NaiveTime {
    add_minutes(start, duration)
}

/// Format minutes as a human-readable duration: `"2h 15min"`, `"2h"`,
/// `"45min"`. Zero components are omitted; zero total renders `"0min"`.
pub fn format_duration(minutes: Minutes) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        format!("{}min", mins)
    } else if mins == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}min", hours, mins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn test_parse_valid_times() {
        assert_eq!(parse_clock_time("09:05"), Ok(at(9, 5)));
        assert_eq!(parse_clock_time("00:00"), Ok(at(0, 0)));
        assert_eq!(parse_clock_time("23:59"), Ok(at(23, 59)));
    }

    #[test]
    fn test_parse_unpadded_fields() {
        // The UI zero-pads, but the parser tolerates bare digits
        assert_eq!(parse_clock_time("9:5"), Ok(at(9, 5)));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!(matches!(
            parse_clock_time("0900"),
            Err(ClockError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_clock_time("ab:cd"),
            Err(ClockError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_clock_time("12:30:00"),
            Err(ClockError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_clock_time(""),
            Err(ClockError::InvalidFormat(_))
        ));
        assert!(matches!(
            parse_clock_time("12:"),
            Err(ClockError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_parse_rejects_out_of_range_fields() {
        assert!(matches!(
            parse_clock_time("24:00"),
            Err(ClockError::FieldOutOfRange(_))
        ));
        assert!(matches!(
            parse_clock_time("12:60"),
            Err(ClockError::FieldOutOfRange(_))
        ));
    }

    #[test]
    fn test_format_zero_pads() {
        assert_eq!(format_clock_time(at(9, 5)), "09:05");
        assert_eq!(format_clock_time(at(0, 0)), "00:00");
        assert_eq!(format_clock_time(at(23, 59)), "23:59");
    }

    #[test]
    fn test_add_minutes_crosses_hour_boundary() {
        assert_eq!(add_minutes(at(9, 45), 30), at(10, 15));
        assert_eq!(add_minutes(at(9, 0), 0), at(9, 0));
    }

    #[test]
    fn test_add_minutes_wraps_midnight() {
        assert_eq!(add_minutes(at(23, 30), 45), at(0, 15));
    }

    #[test]
    fn test_window_minutes() {
        assert_eq!(window_minutes(at(9, 0), at(10, 0)), 60);
        assert_eq!(window_minutes(at(9, 0), at(9, 0)), 0);
        assert_eq!(window_minutes(at(9, 0), at(8, 0)), -60);
        assert_eq!(window_minutes(at(8, 15), at(17, 45)), 570);
    }

    #[test]
    fn test_calculate_end_time() {
        assert_eq!(calculate_end_time(at(9, 0), 90), at(10, 30));
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(0), "0min");
        assert_eq!(format_duration(45), "45min");
        assert_eq!(format_duration(60), "1h");
        assert_eq!(format_duration(90), "1h 30min");
        assert_eq!(format_duration(120), "2h");
    }
}
