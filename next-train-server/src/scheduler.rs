//! The scheduler: a shared, reloadable timetable snapshot.
//!
//! Constructed once at startup and handed to request handlers explicitly;
//! there is no global instance. Readers see the previously loaded snapshot
//! until a reload swaps a new one in.

use std::sync::Arc;

use chrono::{Datelike, NaiveDateTime};
use tokio::sync::RwLock;

use crate::domain::{DayType, Departure, Timetable};
use crate::planner::{Calculator, Clock, NextDeparture};
use crate::schedule::{ScheduleError, ScheduleSource, load_timetable};

/// Thread-safe access to the loaded timetable plus the calculator over it.
///
/// Cloning is cheap; all clones share the same snapshot. `reload` is
/// idempotent and expected to have a single caller at a time (startup plus
/// the periodic refresh task); readers never block on a reload in progress
/// because the new snapshot is built before the write lock is taken.
#[derive(Clone)]
pub struct Scheduler {
    inner: Arc<RwLock<Option<Timetable>>>,
    source: Arc<dyn ScheduleSource>,
    clock: Arc<dyn Clock>,
    calculator: Calculator,
}

impl Scheduler {
    /// Create an unloaded scheduler. Call [`reload`](Self::reload) to load
    /// the first snapshot.
    pub fn new(
        source: Arc<dyn ScheduleSource>,
        clock: Arc<dyn Clock>,
        calculator: Calculator,
    ) -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
            source,
            clock,
            calculator,
        }
    }

    /// The calculator this scheduler answers queries with.
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// Load a fresh snapshot from the source and swap it in.
    ///
    /// The day variant is derived from the clock at load time, so a reload
    /// that crosses into the weekend picks up the weekend list. On failure
    /// the previous snapshot (if any) stays in place and the error is
    /// returned.
    ///
    /// Returns the number of departures in the new snapshot.
    pub async fn reload(&self) -> Result<usize, ScheduleError> {
        let day_type = DayType::from_weekday(self.clock.now().weekday());
        let timetable = load_timetable(self.source.as_ref(), day_type)?;
        let count = timetable.departures.len();

        let mut guard = self.inner.write().await;
        *guard = Some(timetable);

        Ok(count)
    }

    /// The loaded station name, or `None` when unloaded or the source
    /// carried no name.
    pub async fn station_name(&self) -> Option<String> {
        let guard = self.inner.read().await;
        guard
            .as_ref()
            .map(|t| t.station.clone())
            .filter(|s| !s.is_empty())
    }

    /// All departures in the loaded snapshot, empty when unloaded.
    pub async fn all_departures(&self) -> Vec<Departure> {
        let guard = self.inner.read().await;
        guard.as_ref().map(|t| t.departures.clone()).unwrap_or_default()
    }

    /// Whether a timetable snapshot is loaded.
    pub async fn is_loaded(&self) -> bool {
        let guard = self.inner.read().await;
        guard.is_some()
    }

    /// The next catchable departure at `now` (defaults to the clock).
    ///
    /// Returns `None` only when no timetable is loaded ("could not
    /// compute"). A loaded timetable with nothing left today yields the
    /// calculator's sentinel result instead.
    pub async fn next_departure(&self, now: Option<NaiveDateTime>) -> Option<NextDeparture> {
        let now = now.unwrap_or_else(|| self.clock.now());
        let guard = self.inner.read().await;
        guard.as_ref().map(|t| self.calculator.find_next(t, now))
    }
}
