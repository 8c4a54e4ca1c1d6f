//! Timetable loading error types.

/// Errors that can occur while loading a timetable.
#[derive(Debug, thiserror::Error)]
pub enum ScheduleError {
    /// The source decoded fine but matches neither known timetable shape.
    #[error("invalid schedule format: {reason}")]
    InvalidScheduleFormat { reason: &'static str },

    /// The source could not be read or decoded. Reported, never retried
    /// inside the loader; callers fall back to an empty timetable.
    #[error("schedule source unavailable: {message}")]
    DataSourceUnavailable { message: String },
}

impl ScheduleError {
    pub(crate) fn unavailable(message: impl Into<String>) -> Self {
        ScheduleError::DataSourceUnavailable {
            message: message.into(),
        }
    }
}
