//! Application state for the hours engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::{AttendanceSource, InMemoryAttendance};

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// loaded configuration and the attendance source.
#[derive(Clone)]
pub struct AppState {
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
    /// Where attendance records are read from.
    source: Arc<dyn AttendanceSource>,
}

impl AppState {
    /// Creates a new application state backed by an in-memory store seeded
    /// from the configuration's attendance snapshot.
    pub fn new(config: ConfigLoader) -> Self {
        let source = InMemoryAttendance::from_snapshot(config.attendance());
        Self::with_source(config, Arc::new(source))
    }

    /// Creates a new application state with an explicit attendance source.
    pub fn with_source(config: ConfigLoader, source: Arc<dyn AttendanceSource>) -> Self {
        Self {
            config: Arc::new(config),
            source,
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the attendance source.
    pub fn source(&self) -> &dyn AttendanceSource {
        self.source.as_ref()
    }
}
