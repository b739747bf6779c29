use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

// Compiled regex for HH:MM:SS time-of-day strings
static TIME_OF_DAY_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([0-9]{2}):([0-9]{2}):([0-9]{2})$").unwrap());

/// Sentinel used on the page for "no value" (no maintenance slot, no wait time).
pub const NONE_SENTINEL: &str = "-";

/// Wall-clock time of day with one-second resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimeOfDay {
    hours: u8,
    minutes: u8,
    seconds: u8,
}

impl TimeOfDay {
    pub fn new(hours: u8, minutes: u8, seconds: u8) -> Result<Self, TimeOfDayError> {
        if hours > 23 {
            return Err(TimeOfDayError::InvalidHours(hours));
        }
        if minutes > 59 {
            return Err(TimeOfDayError::InvalidMinutes(minutes));
        }
        if seconds > 59 {
            return Err(TimeOfDayError::InvalidSeconds(seconds));
        }
        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    pub fn hours(&self) -> u8 {
        self.hours
    }

    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    pub fn seconds(&self) -> u8 {
        self.seconds
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Time parsing error types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeOfDayError {
    EmptyInput,
    InvalidFormat(String),
    InvalidHours(u8),
    InvalidMinutes(u8),
    InvalidSeconds(u8),
}

impl fmt::Display for TimeOfDayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeOfDayError::EmptyInput => write!(f, "Time cannot be empty"),
            TimeOfDayError::InvalidFormat(input) => {
                write!(f, "Invalid time format '{}'. Use HH:MM:SS", input)
            }
            TimeOfDayError::InvalidHours(h) => write!(f, "Invalid hours: {} (must be 0-23)", h),
            TimeOfDayError::InvalidMinutes(m) => {
                write!(f, "Invalid minutes: {} (must be 0-59)", m)
            }
            TimeOfDayError::InvalidSeconds(s) => {
                write!(f, "Invalid seconds: {} (must be 0-59)", s)
            }
        }
    }
}

impl std::error::Error for TimeOfDayError {}

/// Parse an `HH:MM:SS` string into a [`TimeOfDay`].
///
/// # Examples
/// ```
/// use themepark_web::utils::parse_time_of_day;
/// assert_eq!(parse_time_of_day("14:30:00").unwrap().to_string(), "14:30:00");
/// assert!(parse_time_of_day("2:30").is_err());
/// ```
pub fn parse_time_of_day(input: &str) -> Result<TimeOfDay, TimeOfDayError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TimeOfDayError::EmptyInput);
    }

    let captures = TIME_OF_DAY_REGEX
        .captures(trimmed)
        .ok_or_else(|| TimeOfDayError::InvalidFormat(trimmed.to_string()))?;

    // Two ASCII digits always parse into a u8
    let field = |i: usize| captures[i].parse::<u8>().unwrap_or(u8::MAX);
    TimeOfDay::new(field(1), field(2), field(3))
}

/// Parse a maintenance column value: either a time of day or the `-` sentinel.
pub fn parse_optional_time_of_day(input: &str) -> Result<Option<TimeOfDay>, TimeOfDayError> {
    let trimmed = input.trim();
    if trimmed == NONE_SENTINEL {
        return Ok(None);
    }
    parse_time_of_day(trimmed).map(Some)
}

/// Format a wait time for display: "Xh Y mins" from one hour up, "X mins" below.
pub fn format_wait_minutes(minutes: u32) -> String {
    if minutes >= 60 {
        format!("{}h {} mins", minutes / 60, minutes % 60)
    } else {
        format!("{} mins", minutes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_short_waits_in_minutes() {
        assert_eq!(format_wait_minutes(1), "1 mins");
        assert_eq!(format_wait_minutes(59), "59 mins");
    }

    #[test]
    fn formats_long_waits_in_hours_and_minutes() {
        assert_eq!(format_wait_minutes(60), "1h 0 mins");
        assert_eq!(format_wait_minutes(75), "1h 15 mins");
        assert_eq!(format_wait_minutes(120), "2h 0 mins");
    }

    #[test]
    fn parses_valid_time_of_day() {
        let t = parse_time_of_day(" 17:15:00 ").unwrap();
        assert_eq!((t.hours(), t.minutes(), t.seconds()), (17, 15, 0));
        assert_eq!(t.to_string(), "17:15:00");
    }

    #[test]
    fn rejects_malformed_time_of_day() {
        assert_eq!(parse_time_of_day(""), Err(TimeOfDayError::EmptyInput));
        assert!(matches!(
            parse_time_of_day("7:15:00"),
            Err(TimeOfDayError::InvalidFormat(_))
        ));
        assert_eq!(
            parse_time_of_day("24:00:00"),
            Err(TimeOfDayError::InvalidHours(24))
        );
        assert_eq!(
            parse_time_of_day("12:60:00"),
            Err(TimeOfDayError::InvalidMinutes(60))
        );
        assert_eq!(
            parse_time_of_day("12:00:61"),
            Err(TimeOfDayError::InvalidSeconds(61))
        );
    }

    #[test]
    fn dash_means_no_time() {
        assert_eq!(parse_optional_time_of_day("-"), Ok(None));
        assert!(parse_optional_time_of_day("14:30:00").unwrap().is_some());
    }
}
