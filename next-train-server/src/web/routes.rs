//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{HeaderValue, Method, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Local;
use tower_http::cors::CorsLayer;

use crate::profiles::ProfileError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    Router::new()
        .route("/api/health", get(health))
        .route("/api/next-train", get(next_train))
        .route("/api/trains", get(all_trains))
        .route("/api/config", get(config))
        .route("/api/profiles", get(list_profiles))
        .route("/api/profiles/:name", get(get_profile))
        .layer(cors)
        .with_state(state)
}

/// Build the CORS layer from the configured origins.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE])
}

/// Health check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: Local::now().to_rfc3339(),
    })
}

/// The next catchable train and its derived times.
async fn next_train(State(state): State<AppState>) -> Result<Json<NextTrainResponse>, AppError> {
    let result = state
        .scheduler
        .next_departure(None)
        .await
        .ok_or_else(|| AppError::Internal {
            message: "timetable data is not loaded".to_string(),
        })?;

    let station_name = state.scheduler.station_name().await;
    Ok(Json(NextTrainResponse::from_result(&result, station_name)))
}

/// Every departure in the loaded timetable.
async fn all_trains(State(state): State<AppState>) -> Json<TrainsResponse> {
    let trains = state
        .scheduler
        .all_departures()
        .await
        .iter()
        .map(TrainDto::from_departure)
        .collect();

    Json(TrainsResponse {
        station_name: state.scheduler.station_name().await,
        trains,
    })
}

/// The settings the frontend needs to label its display.
async fn config(State(state): State<AppState>) -> Json<ConfigResponse> {
    let calculator = state.scheduler.calculator();

    Json(ConfigResponse {
        station_name: state.scheduler.station_name().await,
        home_to_station_minutes: calculator.walk_minutes(),
        preparation_minutes: calculator.prep_minutes(),
        update_interval_seconds: state.config.update_interval_seconds(),
    })
}

/// List available commute profiles.
async fn list_profiles(State(state): State<AppState>) -> Result<Json<ProfilesResponse>, AppError> {
    let profiles = state.profiles.list()?;
    Ok(Json(ProfilesResponse { profiles }))
}

/// Look up one profile by name.
async fn get_profile(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<crate::profiles::Profile>, AppError> {
    let profile = state.profiles.get(&name)?;
    Ok(Json(profile))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<ProfileError> for AppError {
    fn from(e: ProfileError) -> Self {
        match e {
            ProfileError::NotFound { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            ProfileError::Unavailable { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::error!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
