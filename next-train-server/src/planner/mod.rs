//! The next-departure calculator.
//!
//! This is the computational core of the service: pure functions over
//! (timetable, now, walking minutes, preparation minutes). The current
//! instant is injected through the [`Clock`] trait; nothing in here performs
//! I/O or blocks.

mod calculator;
mod clock;

pub use calculator::{Calculator, NextDeparture};
pub use clock::{Clock, FixedClock, SystemClock};
