//! Commute profiles.
//!
//! A profile is a named preset (departure station plus destinations) stored
//! as one JSON file per profile in a flat directory. Profiles are read-only
//! reference data for the frontend; the scheduler does not consume them.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Errors from profile loading.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    /// The profile directory or a file in it could not be read or decoded.
    #[error("profile source unavailable: {message}")]
    Unavailable { message: String },

    /// No profile with the requested name exists.
    #[error("no such profile: {name}")]
    NotFound { name: String },
}

impl ProfileError {
    fn unavailable(message: impl Into<String>) -> Self {
        ProfileError::Unavailable {
            message: message.into(),
        }
    }
}

/// A destination within a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDestination {
    /// Destination station name.
    pub station: String,

    /// Travel time hint, free-form as the legacy files store it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<String>,
}

/// A named commute preset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Profile name; defaults to the file stem when the file omits it.
    #[serde(default)]
    pub name: String,

    /// Departure station.
    pub departure: String,

    /// Destinations reachable from the departure station.
    #[serde(default)]
    pub destinations: Vec<ProfileDestination>,
}

/// Lists and looks up profiles in a directory.
///
/// Reads the directory on every call rather than caching, so dropping a new
/// profile file in takes effect immediately.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory this store reads from.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// List all profiles, sorted by name.
    ///
    /// Non-JSON files are skipped; a missing directory is reported as
    /// `Unavailable`.
    pub fn list(&self) -> Result<Vec<Profile>, ProfileError> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            ProfileError::unavailable(format!(
                "failed to read profile directory {:?}: {}",
                self.dir, e
            ))
        })?;

        let mut profiles = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| {
                ProfileError::unavailable(format!("failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            profiles.push(load_profile_file(&path)?);
        }

        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }

    /// Look up one profile by name.
    pub fn get(&self, name: &str) -> Result<Profile, ProfileError> {
        self.list()?
            .into_iter()
            .find(|p| p.name == name)
            .ok_or_else(|| ProfileError::NotFound {
                name: name.to_string(),
            })
    }
}

fn load_profile_file(path: &Path) -> Result<Profile, ProfileError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| ProfileError::unavailable(format!("failed to read {path:?}: {e}")))?;

    let mut profile: Profile = serde_json::from_str(&json)
        .map_err(|e| ProfileError::unavailable(format!("failed to parse {path:?}: {e}")))?;

    // Fall back to the file stem as the profile name
    if profile.name.is_empty() {
        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            profile.name = stem.to_string();
        }
    }

    Ok(profile)
}
