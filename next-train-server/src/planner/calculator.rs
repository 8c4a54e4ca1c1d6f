//! The next-departure calculation.
//!
//! Pure time arithmetic: given a timetable and the current instant, find the
//! earliest train whose "leave home by" time is still in the future.

use chrono::NaiveDateTime;

use crate::domain::{Departure, Timetable, WallTime};

/// The answer to "when must I leave home".
///
/// Built fresh per query, never stored. The `None` fields together form the
/// sentinel "nothing qualifies today" result, which is a normal outcome and
/// distinct from "a timetable could not be loaded".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextDeparture {
    /// The query instant, truncated to minute resolution.
    pub current_time: WallTime,

    /// When to leave home, or `None` when no departure qualifies.
    pub leave_home_by: Option<WallTime>,

    /// When you would reach the station, or `None` when no departure
    /// qualifies.
    pub station_arrival: Option<WallTime>,

    /// The chosen train, or `None` when no departure qualifies.
    pub departure: Option<Departure>,

    /// Whole minutes until the leave-home time; 0 for the sentinel result.
    pub minutes_until_leave: i64,
}

impl NextDeparture {
    /// Whether any departure qualified.
    pub fn is_catchable(&self) -> bool {
        self.departure.is_some()
    }
}

/// Computes leave-home and station-arrival times from fixed walking and
/// preparation overheads.
///
/// Deterministic given its inputs: `now` is passed in explicitly and there is
/// no hidden state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    walk_minutes: u32,
    prep_minutes: u32,
}

impl Calculator {
    pub fn new(walk_minutes: u32, prep_minutes: u32) -> Self {
        Self {
            walk_minutes,
            prep_minutes,
        }
    }

    /// Walking time from home to the station, in minutes.
    pub fn walk_minutes(&self) -> u32 {
        self.walk_minutes
    }

    /// Preparation time before leaving home, in minutes.
    pub fn prep_minutes(&self) -> u32 {
        self.prep_minutes
    }

    /// When to leave home to catch a train departing at `train_departure`.
    ///
    /// Subtracts walking plus preparation time on the 24-hour clock face.
    /// When the overhead exceeds the departure's minutes-since-midnight the
    /// result wraps to the previous evening (e.g. a 00:10 train with 20
    /// minutes of overhead gives 23:50). This mirrors the same-day datetime
    /// arithmetic the behavior was inherited from; departures that close to
    /// midnight are ambiguous by definition here.
    pub fn leave_home_by(&self, train_departure: WallTime) -> WallTime {
        train_departure.wrapping_sub_minutes(self.walk_minutes + self.prep_minutes)
    }

    /// When you reach the station after leaving home at `leave_time`.
    /// Same wrap rule as [`leave_home_by`](Self::leave_home_by).
    pub fn station_arrival(&self, leave_time: WallTime) -> WallTime {
        leave_time.wrapping_add_minutes(self.walk_minutes)
    }

    /// Find the first departure whose leave-home time is still in the
    /// future.
    ///
    /// Scans in stored order and returns the first departure with
    /// `leave_home_by` strictly after `now` — a leave-by instant equal to
    /// "now" is already missed. Relies on the timetable's ascending-order
    /// precondition to stop at the first match.
    ///
    /// When nothing qualifies (all of today's trains missed, or the list is
    /// empty) the sentinel result is returned.
    pub fn find_next(&self, timetable: &Timetable, now: NaiveDateTime) -> NextDeparture {
        let current_time = WallTime::from_naive(now.time());

        for departure in &timetable.departures {
            let leave = self.leave_home_by(departure.departure_time);

            if leave > current_time {
                // Unwrapped same-day difference: `leave` is later than `now`
                // on the clock face, so combining with today's date gives a
                // positive minute count.
                let leave_instant = now.date().and_time(leave.to_naive());
                let minutes_until_leave = leave_instant.signed_duration_since(now).num_minutes();

                return NextDeparture {
                    current_time,
                    leave_home_by: Some(leave),
                    station_arrival: Some(self.station_arrival(leave)),
                    departure: Some(departure.clone()),
                    minutes_until_leave,
                };
            }
        }

        NextDeparture {
            current_time,
            leave_home_by: None,
            station_arrival: None,
            departure: None,
            minutes_until_leave: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn hm(h: u32, m: u32) -> WallTime {
        WallTime::from_hm(h, m).unwrap()
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 17)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn departure(h: u32, m: u32) -> Departure {
        Departure {
            line: "Chuo".into(),
            destination: "Tokyo".into(),
            departure_time: hm(h, m),
            arrival_time: hm(h, m).wrapping_add_minutes(15),
        }
    }

    fn timetable(departures: Vec<Departure>) -> Timetable {
        Timetable {
            station: "Shinjuku".into(),
            departures,
        }
    }

    #[test]
    fn leave_home_by_subtracts_overheads() {
        let calc = Calculator::new(10, 5);
        assert_eq!(calc.leave_home_by(hm(8, 0)), hm(7, 45));
    }

    #[test]
    fn leave_home_by_wraps_past_midnight() {
        let calc = Calculator::new(15, 5);
        assert_eq!(calc.leave_home_by(hm(0, 10)), hm(23, 50));
    }

    #[test]
    fn station_arrival_adds_walk_only() {
        let calc = Calculator::new(10, 5);
        assert_eq!(calc.station_arrival(hm(7, 45)), hm(7, 55));
    }

    #[test]
    fn next_train_before_first_departure() {
        // Scenario A: trains at 08:00 and 08:30, walk 10, prep 5, now 07:00
        let calc = Calculator::new(10, 5);
        let t = timetable(vec![departure(8, 0), departure(8, 30)]);

        let result = calc.find_next(&t, at(7, 0));

        assert_eq!(result.leave_home_by, Some(hm(7, 45)));
        assert_eq!(result.station_arrival, Some(hm(7, 55)));
        assert_eq!(
            result.departure.as_ref().map(|d| d.departure_time),
            Some(hm(8, 0))
        );
        assert_eq!(result.minutes_until_leave, 45);
        assert!(result.is_catchable());
    }

    #[test]
    fn next_train_skips_missed_departure() {
        // Scenario B: same timetable, now 07:50 — the 08:00 is already missed
        let calc = Calculator::new(10, 5);
        let t = timetable(vec![departure(8, 0), departure(8, 30)]);

        let result = calc.find_next(&t, at(7, 50));

        assert_eq!(result.leave_home_by, Some(hm(8, 15)));
        assert_eq!(
            result.departure.as_ref().map(|d| d.departure_time),
            Some(hm(8, 30))
        );
        assert_eq!(result.minutes_until_leave, 25);
    }

    #[test]
    fn no_trains_left_gives_sentinel() {
        // Scenario C: only an 08:00 train, queried at 23:00
        let calc = Calculator::new(10, 5);
        let t = timetable(vec![departure(8, 0)]);

        let result = calc.find_next(&t, at(23, 0));

        assert_eq!(result.current_time, hm(23, 0));
        assert_eq!(result.leave_home_by, None);
        assert_eq!(result.station_arrival, None);
        assert_eq!(result.departure, None);
        assert_eq!(result.minutes_until_leave, 0);
        assert!(!result.is_catchable());
    }

    #[test]
    fn empty_timetable_gives_sentinel() {
        let calc = Calculator::new(10, 5);
        let result = calc.find_next(&timetable(vec![]), at(9, 0));
        assert!(!result.is_catchable());
    }

    #[test]
    fn leave_by_equal_to_now_is_missed() {
        // Strict inequality: leave-home-by exactly "now" does not qualify
        let calc = Calculator::new(10, 5);
        let t = timetable(vec![departure(8, 0), departure(8, 30)]);

        let result = calc.find_next(&t, at(7, 45));

        assert_eq!(result.leave_home_by, Some(hm(8, 15)));
        assert_eq!(
            result.departure.as_ref().map(|d| d.departure_time),
            Some(hm(8, 30))
        );
    }

    #[test]
    fn seconds_count_toward_minutes_until_leave() {
        let calc = Calculator::new(10, 5);
        let t = timetable(vec![departure(8, 0)]);

        // 07:00:30 -> 44.5 minutes until 07:45, floored to 44
        let now = NaiveDate::from_ymd_opt(2026, 3, 17)
            .unwrap()
            .and_hms_opt(7, 0, 30)
            .unwrap();

        let result = calc.find_next(&t, now);
        assert_eq!(result.minutes_until_leave, 44);
    }

    #[test]
    fn find_next_is_deterministic() {
        let calc = Calculator::new(10, 5);
        let t = timetable(vec![departure(8, 0), departure(8, 30), departure(9, 0)]);
        let now = at(7, 50);

        assert_eq!(calc.find_next(&t, now), calc.find_next(&t, now));
    }

    #[test]
    fn zero_overhead_calculator() {
        let calc = Calculator::new(0, 0);
        let t = timetable(vec![departure(8, 0)]);

        let result = calc.find_next(&t, at(7, 59));
        assert_eq!(result.leave_home_by, Some(hm(8, 0)));
        assert_eq!(result.station_arrival, Some(hm(8, 0)));
        assert_eq!(result.minutes_until_leave, 1);
    }
}
