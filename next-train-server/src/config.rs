//! Server configuration.
//!
//! Read from `NEXT_TRAIN_*` environment variables with defaults matching the
//! service's original deployment (Raspberry Pi on a LAN, Vite dev frontend).
//! The core consumes these values; it does not own them.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Error raised for an environment variable that fails to parse.
#[derive(Debug, thiserror::Error)]
#[error("invalid value for {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

/// All server settings.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the timetable JSON file.
    pub schedule_path: PathBuf,

    /// Directory of profile JSON files.
    pub profiles_dir: PathBuf,

    /// Walking time from home to the station, in minutes.
    pub walk_minutes: u32,

    /// Preparation time before leaving home, in minutes.
    pub prep_minutes: u32,

    /// How often the timetable is reloaded from disk.
    pub update_interval: Duration,

    /// Address the HTTP server binds to.
    pub listen_addr: SocketAddr,

    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schedule_path: PathBuf::from("data/train_schedule.json"),
            profiles_dir: PathBuf::from("data/profiles"),
            walk_minutes: 10,
            prep_minutes: 3,
            update_interval: Duration::from_secs(60),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            cors_origins: vec![
                "http://localhost:3000".to_string(),
                "http://localhost:5173".to_string(),
            ],
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    ///
    /// Split out from [`from_env`](Self::from_env) so tests don't mutate the
    /// process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            schedule_path: lookup("NEXT_TRAIN_SCHEDULE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.schedule_path),
            profiles_dir: lookup("NEXT_TRAIN_PROFILES_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.profiles_dir),
            walk_minutes: parse_var(
                "NEXT_TRAIN_WALK_MINUTES",
                lookup("NEXT_TRAIN_WALK_MINUTES"),
                defaults.walk_minutes,
            )?,
            prep_minutes: parse_var(
                "NEXT_TRAIN_PREP_MINUTES",
                lookup("NEXT_TRAIN_PREP_MINUTES"),
                defaults.prep_minutes,
            )?,
            update_interval: parse_var(
                "NEXT_TRAIN_UPDATE_INTERVAL_SECS",
                lookup("NEXT_TRAIN_UPDATE_INTERVAL_SECS"),
                defaults.update_interval.as_secs(),
            )
            .map(Duration::from_secs)?,
            listen_addr: parse_var(
                "NEXT_TRAIN_LISTEN_ADDR",
                lookup("NEXT_TRAIN_LISTEN_ADDR"),
                defaults.listen_addr,
            )?,
            cors_origins: lookup("NEXT_TRAIN_CORS_ORIGINS")
                .map(|s| {
                    s.split(',')
                        .map(|o| o.trim().to_string())
                        .filter(|o| !o.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
        })
    }

    /// The reload interval in whole seconds, as reported by `/api/config`.
    pub fn update_interval_seconds(&self) -> u64 {
        self.update_interval.as_secs()
    }
}

fn parse_var<T>(var: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match value {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError {
            var,
            message: e.to_string(),
        }),
    }
}
