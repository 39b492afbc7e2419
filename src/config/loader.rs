//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading engine
//! configuration and the attendance seed snapshot from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{AttendanceSnapshot, EngineConfig, HoursPolicy, ServerSettings};

/// Loads and provides access to engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/default/
/// ├── engine.yaml      # Server settings and hour accounting policy
/// └── attendance.yaml  # Attendance records served by the in-memory store
/// ```
///
/// # Example
///
/// ```no_run
/// use hours_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("Standard day: {}h", loader.hours_policy().standard_day_hours);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    engine: EngineConfig,
    attendance: AttendanceSnapshot,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `engine.yaml` or `attendance.yaml` is missing
    /// - either file contains invalid YAML or unknown enum values
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let engine = load_yaml::<EngineConfig>(&path.join("engine.yaml"))?;
        let attendance = load_yaml::<AttendanceSnapshot>(&path.join("attendance.yaml"))?;

        Ok(Self { engine, attendance })
    }

    /// Builds a loader from already-parsed parts.
    pub fn from_parts(engine: EngineConfig, attendance: AttendanceSnapshot) -> Self {
        Self { engine, attendance }
    }

    /// Returns the server settings.
    pub fn server(&self) -> &ServerSettings {
        &self.engine.server
    }

    /// Returns the hour accounting policy.
    pub fn hours_policy(&self) -> &HoursPolicy {
        &self.engine.hours
    }

    /// Returns the attendance seed snapshot.
    pub fn attendance(&self) -> &AttendanceSnapshot {
        &self.attendance
    }
}

/// Loads and parses a YAML file.
fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
    let path_str = path.display().to_string();

    let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
        path: path_str.clone(),
    })?;

    serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
        path: path_str,
        message: e.to_string(),
    })
}
