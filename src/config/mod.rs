//! Configuration loading and management for the hours engine.
//!
//! This module provides functionality to load engine configuration from YAML
//! files: server settings, the hour accounting policy, and the attendance
//! snapshot that seeds the in-memory store.
//!
//! # Example
//!
//! ```no_run
//! use hours_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Binding to {}", config.server().bind_address);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AbsencePolicy, AttendanceSnapshot, EngineConfig, HoursPolicy, ServerSettings, UserAttendance,
};
