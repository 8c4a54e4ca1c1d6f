//! Wall-clock time handling for timetable data.
//!
//! Timetable files provide times as "HH:MM" strings with no date component.
//! This module provides a minute-resolution time-of-day type with the modular
//! (mod 24h) arithmetic the leave-home calculation is defined in terms of.

use chrono::{NaiveTime, Timelike};
use std::fmt;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// Minutes in a day; all `WallTime` arithmetic is modulo this.
const MINUTES_PER_DAY: u32 = 24 * 60;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A wall-clock time of day with minute resolution.
///
/// Unlike a full datetime there is no date component: a `WallTime` is a point
/// on the 24-hour clock face, and subtracting past midnight wraps around.
/// This matches how the timetable data is written (zero-padded "HH:MM"
/// strings, no dates).
///
/// # Examples
///
/// ```
/// use next_train_server::domain::WallTime;
///
/// let t = WallTime::parse_hhmm("08:30").unwrap();
/// assert_eq!(t.to_string(), "08:30");
/// assert_eq!(t.minutes_since_midnight(), 8 * 60 + 30);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WallTime {
    /// Minutes since midnight, always in `0..1440`.
    minutes: u16,
}

impl WallTime {
    /// Create a time from hour and minute components.
    ///
    /// Returns `None` if the components are out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        Some(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Parse a time from strict zero-padded "HH:MM" format.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_train_server::domain::WallTime;
    ///
    /// // Valid times
    /// assert!(WallTime::parse_hhmm("00:00").is_ok());
    /// assert!(WallTime::parse_hhmm("23:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(WallTime::parse_hhmm("830").is_err());
    /// assert!(WallTime::parse_hhmm("8:30").is_err());
    /// assert!(WallTime::parse_hhmm("24:00").is_err());
    /// ```
    pub fn parse_hhmm(s: &str) -> Result<Self, TimeError> {
        // Must be exactly 5 characters: HH:MM
        if s.len() != 5 {
            return Err(TimeError::new("expected HH:MM format"));
        }

        let bytes = s.as_bytes();

        if bytes[2] != b':' {
            return Err(TimeError::new("expected colon at position 2"));
        }

        let hour =
            parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeError::new("hour must be 0-23"));
        }

        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeError::new("minute must be 0-59"));
        }

        Ok(Self {
            minutes: (hour * 60 + minute) as u16,
        })
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.minutes as u32 / 60
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.minutes as u32 % 60
    }

    /// Returns the number of minutes since midnight (0-1439).
    pub fn minutes_since_midnight(&self) -> u32 {
        self.minutes as u32
    }

    /// Add minutes, wrapping around midnight.
    ///
    /// # Examples
    ///
    /// ```
    /// use next_train_server::domain::WallTime;
    ///
    /// let t = WallTime::parse_hhmm("23:30").unwrap();
    /// assert_eq!(t.wrapping_add_minutes(45).to_string(), "00:15");
    /// ```
    pub fn wrapping_add_minutes(&self, minutes: u32) -> Self {
        let total = (self.minutes as u32 + minutes % MINUTES_PER_DAY) % MINUTES_PER_DAY;
        Self {
            minutes: total as u16,
        }
    }

    /// Subtract minutes, wrapping around midnight.
    ///
    /// A subtraction that would go negative wraps to the previous evening:
    /// `00:10 - 20min = 23:50`.
    pub fn wrapping_sub_minutes(&self, minutes: u32) -> Self {
        let sub = minutes % MINUTES_PER_DAY;
        let total = (self.minutes as u32 + MINUTES_PER_DAY - sub) % MINUTES_PER_DAY;
        Self {
            minutes: total as u16,
        }
    }

    /// Convert to a `chrono::NaiveTime` (seconds are zero).
    pub fn to_naive(&self) -> NaiveTime {
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0)
            .expect("WallTime is always a valid time of day")
    }

    /// Truncate a `chrono::NaiveTime` to minute resolution.
    pub fn from_naive(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl fmt::Debug for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WallTime({:02}:{:02})", self.hour(), self.minute())
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl Serialize for WallTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for WallTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        WallTime::parse_hhmm(&s).map_err(de::Error::custom)
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = WallTime::parse_hhmm("00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);

        let t = WallTime::parse_hhmm("23:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);

        let t = WallTime::parse_hhmm("14:30").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(WallTime::parse_hhmm("1430").is_err());
        assert!(WallTime::parse_hhmm("14:3").is_err());
        assert!(WallTime::parse_hhmm("14:300").is_err());

        // Missing colon
        assert!(WallTime::parse_hhmm("14-30").is_err());
        assert!(WallTime::parse_hhmm("14.30").is_err());

        // Non-digit characters
        assert!(WallTime::parse_hhmm("ab:cd").is_err());
        assert!(WallTime::parse_hhmm("1a:30").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        assert!(WallTime::parse_hhmm("24:00").is_err());
        assert!(WallTime::parse_hhmm("25:00").is_err());
        assert!(WallTime::parse_hhmm("12:60").is_err());
        assert!(WallTime::parse_hhmm("12:99").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(WallTime::parse_hhmm("00:00").unwrap().to_string(), "00:00");
        assert_eq!(WallTime::parse_hhmm("09:05").unwrap().to_string(), "09:05");
        assert_eq!(WallTime::parse_hhmm("23:59").unwrap().to_string(), "23:59");
    }

    #[test]
    fn ordering() {
        let t1 = WallTime::parse_hhmm("07:45").unwrap();
        let t2 = WallTime::parse_hhmm("08:00").unwrap();

        assert!(t1 < t2);
        assert!(t2 > t1);
        assert_eq!(t1, WallTime::from_hm(7, 45).unwrap());
    }

    #[test]
    fn add_wraps_midnight() {
        let t = WallTime::parse_hhmm("23:30").unwrap();
        assert_eq!(t.wrapping_add_minutes(45).to_string(), "00:15");

        let t = WallTime::parse_hhmm("10:00").unwrap();
        assert_eq!(t.wrapping_add_minutes(90).to_string(), "11:30");
    }

    #[test]
    fn sub_wraps_midnight() {
        let t = WallTime::parse_hhmm("00:10").unwrap();
        assert_eq!(t.wrapping_sub_minutes(20).to_string(), "23:50");

        let t = WallTime::parse_hhmm("08:00").unwrap();
        assert_eq!(t.wrapping_sub_minutes(15).to_string(), "07:45");
    }

    #[test]
    fn sub_whole_day_is_identity() {
        let t = WallTime::parse_hhmm("13:37").unwrap();
        assert_eq!(t.wrapping_sub_minutes(1440), t);
        assert_eq!(t.wrapping_add_minutes(1440), t);
    }

    #[test]
    fn naive_round_trip() {
        let t = WallTime::parse_hhmm("16:42").unwrap();
        assert_eq!(WallTime::from_naive(t.to_naive()), t);

        // Seconds are truncated, not rounded
        let naive = chrono::NaiveTime::from_hms_opt(16, 42, 59).unwrap();
        assert_eq!(WallTime::from_naive(naive), t);
    }

    #[test]
    fn serde_string_form() {
        let t: WallTime = serde_json::from_str("\"08:30\"").unwrap();
        assert_eq!(t, WallTime::from_hm(8, 30).unwrap());
        assert_eq!(serde_json::to_string(&t).unwrap(), "\"08:30\"");

        assert!(serde_json::from_str::<WallTime>("\"8:30\"").is_err());
        assert!(serde_json::from_str::<WallTime>("830").is_err());
    }
}
