//! Data sources for timetable files.

use std::path::{Path, PathBuf};

use super::error::ScheduleError;

/// A source of raw timetable data.
///
/// The loader is written against this trait so tests can feed it in-memory
/// values without touching the filesystem.
pub trait ScheduleSource: Send + Sync {
    /// Load the raw timetable record.
    fn load(&self) -> Result<serde_json::Value, ScheduleError>;
}

/// A timetable source backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for FileSource {
    fn load(&self) -> Result<serde_json::Value, ScheduleError> {
        let json = std::fs::read_to_string(&self.path).map_err(|e| {
            ScheduleError::unavailable(format!("failed to read {:?}: {}", self.path, e))
        })?;

        serde_json::from_str(&json).map_err(|e| {
            ScheduleError::unavailable(format!("failed to parse {:?}: {}", self.path, e))
        })
    }
}
