//! Timetable loading.
//!
//! Turns a raw data source (a JSON file in one of two legacy shapes) into a
//! [`Timetable`](crate::domain::Timetable) for a single day variant.

mod error;
mod loader;
mod source;

pub use error::ScheduleError;
pub use loader::{load_timetable, timetable_from_value};
pub use source::{FileSource, ScheduleSource};
