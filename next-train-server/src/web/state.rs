//! Application state for the web layer.

use std::sync::Arc;

use crate::config::Config;
use crate::profiles::ProfileStore;
use crate::scheduler::Scheduler;

/// Shared application state.
///
/// Contains all the services needed to handle requests.
#[derive(Clone)]
pub struct AppState {
    /// The shared timetable snapshot and calculator.
    pub scheduler: Scheduler,

    /// Profile directory access.
    pub profiles: Arc<ProfileStore>,

    /// Server configuration (reported by `/api/config`).
    pub config: Arc<Config>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(scheduler: Scheduler, profiles: ProfileStore, config: Config) -> Self {
        Self {
            scheduler,
            profiles: Arc::new(profiles),
            config: Arc::new(config),
        }
    }
}
