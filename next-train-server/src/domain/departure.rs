//! Timetable model types.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::WallTime;

/// A single scheduled train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Departure {
    /// Line name (e.g. "Chuo Line").
    pub line: String,

    /// Terminal destination of the train.
    pub destination: String,

    /// Scheduled departure time at the home station.
    pub departure_time: WallTime,

    /// Scheduled arrival time at the train's destination.
    pub arrival_time: WallTime,
}

/// The departure list for one station, already filtered to a single day
/// variant.
///
/// `departures` is assumed sorted ascending by `departure_time`. The
/// calculator stops at the first qualifying entry, so results are undefined
/// if the source data violates this ordering. This is a precondition on the
/// data, not something checked at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timetable {
    /// Station name, empty when the source did not provide one.
    pub station: String,

    /// Scheduled departures, ascending by departure time.
    pub departures: Vec<Departure>,
}

/// Which departure list variant applies: weekday or weekend.
///
/// The loader takes this as an explicit input rather than consulting the
/// clock itself, so variant selection is testable on any day of the week.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayType {
    Weekday,
    Weekend,
}

impl DayType {
    /// Derive the day type from a weekday. Saturday and Sunday are weekend.
    pub fn from_weekday(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Sat | Weekday::Sun => DayType::Weekend,
            _ => DayType::Weekday,
        }
    }

    /// The tag used for this day type in variant-shaped timetable files.
    pub fn tag(&self) -> &'static str {
        match self {
            DayType::Weekday => "weekday",
            DayType::Weekend => "weekend",
        }
    }
}
