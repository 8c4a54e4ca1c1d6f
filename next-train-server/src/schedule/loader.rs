//! Timetable shape detection and day-variant selection.
//!
//! Two legacy file shapes are accepted:
//!
//! - flat: `{ "station": ..., "trains": [...] }` — departures taken as-is.
//! - variants: `{ "depature": ..., "schedules": [ { "type": "weekday" |
//!   "weekend", "trains": [...] }, ... ] }` — the first block whose tag
//!   matches the current day type is selected; the rest are discarded.
//!
//! The variant shape spells its station key `depature` in the legacy data;
//! both spellings are accepted.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{DayType, Departure, Timetable};

use super::error::ScheduleError;
use super::source::ScheduleSource;

/// Flat shape: a single departure list under `trains`.
#[derive(Debug, Deserialize)]
struct FlatFile {
    #[serde(default)]
    station: String,
    trains: Vec<Departure>,
}

/// Variant shape: labeled day-type blocks under `schedules`.
#[derive(Debug, Deserialize)]
struct VariantFile {
    #[serde(default, alias = "depature")]
    station: String,
    schedules: Vec<VariantBlock>,
}

#[derive(Debug, Deserialize)]
struct VariantBlock {
    #[serde(rename = "type", default)]
    day_type: String,
    #[serde(default)]
    trains: Vec<Departure>,
}

/// Build a timetable from a raw record, selecting the departure list for
/// `day_type` when the source is variant-shaped.
///
/// A variant-shaped source with no block matching `day_type` yields an empty
/// departure list with the station name preserved; that is not an error.
pub fn timetable_from_value(value: &Value, day_type: DayType) -> Result<Timetable, ScheduleError> {
    if value.get("schedules").is_some() {
        let file: VariantFile = decode(value)?;

        let departures = file
            .schedules
            .into_iter()
            .find(|block| block.day_type == day_type.tag())
            .map(|block| block.trains)
            .unwrap_or_default();

        return Ok(Timetable {
            station: file.station,
            departures,
        });
    }

    if value.get("trains").is_some() {
        let file: FlatFile = decode(value)?;
        return Ok(Timetable {
            station: file.station,
            departures: file.trains,
        });
    }

    Err(ScheduleError::InvalidScheduleFormat {
        reason: "expected a `trains` list or a `schedules` variant list",
    })
}

/// Load a timetable from a source, selecting the given day variant.
pub fn load_timetable(
    source: &dyn ScheduleSource,
    day_type: DayType,
) -> Result<Timetable, ScheduleError> {
    let value = source.load()?;
    timetable_from_value(&value, day_type)
}

fn decode<'a, T: Deserialize<'a>>(value: &'a Value) -> Result<T, ScheduleError> {
    T::deserialize(value).map_err(|e| ScheduleError::unavailable(format!("decode failed: {e}")))
}
