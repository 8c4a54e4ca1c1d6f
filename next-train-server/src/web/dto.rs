//! JSON response shapes for the API.
//!
//! Field names follow the original API contract the frontend was written
//! against, including the `"--:--"` rendering of the sentinel result.

use serde::Serialize;

use crate::domain::Departure;
use crate::planner::NextDeparture;
use crate::profiles::Profile;

/// Placeholder shown when no departure qualifies.
const NO_TIME: &str = "--:--";

/// A train in API responses.
#[derive(Debug, Clone, Serialize)]
pub struct TrainDto {
    pub line: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
}

impl TrainDto {
    pub fn from_departure(departure: &Departure) -> Self {
        Self {
            line: departure.line.clone(),
            destination: departure.destination.clone(),
            departure_time: departure.departure_time.to_string(),
            arrival_time: departure.arrival_time.to_string(),
        }
    }
}

/// Response for `GET /api/next-train`.
#[derive(Debug, Serialize)]
pub struct NextTrainResponse {
    /// The query time, "HH:MM".
    pub current_time: String,

    /// When to leave home, or `"--:--"` when nothing qualifies.
    pub departure_time: String,

    /// When you reach the station, or `"--:--"` when nothing qualifies.
    pub arrival_time: String,

    /// Whole minutes until the leave-home time; 0 when nothing qualifies.
    pub time_until_departure: i64,

    /// Station name, absent when the timetable carries none.
    pub station_name: Option<String>,

    /// The chosen train, `null` when nothing qualifies.
    pub train: Option<TrainDto>,
}

impl NextTrainResponse {
    pub fn from_result(result: &NextDeparture, station_name: Option<String>) -> Self {
        Self {
            current_time: result.current_time.to_string(),
            departure_time: result
                .leave_home_by
                .map(|t| t.to_string())
                .unwrap_or_else(|| NO_TIME.to_string()),
            arrival_time: result
                .station_arrival
                .map(|t| t.to_string())
                .unwrap_or_else(|| NO_TIME.to_string()),
            time_until_departure: result.minutes_until_leave,
            station_name,
            train: result.departure.as_ref().map(TrainDto::from_departure),
        }
    }
}

/// Response for `GET /api/trains`.
#[derive(Debug, Serialize)]
pub struct TrainsResponse {
    pub station_name: Option<String>,
    pub trains: Vec<TrainDto>,
}

/// Response for `GET /api/config`.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub station_name: Option<String>,
    pub home_to_station_minutes: u32,
    pub preparation_minutes: u32,
    pub update_interval_seconds: u64,
}

/// Response for `GET /api/health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
}

/// Response for `GET /api/profiles`.
#[derive(Debug, Serialize)]
pub struct ProfilesResponse {
    pub profiles: Vec<Profile>,
}

/// Error body for all failure responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
