//! Domain types for the next-train server.
//!
//! The timetable model: wall-clock times, departures, and the day-variant
//! selector. All types validate at construction, so code receiving them can
//! trust their contents.

mod departure;
mod time;

pub use departure::{DayType, Departure, Timetable};
pub use time::{TimeError, WallTime};
