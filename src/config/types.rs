//! Configuration types for the hours engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::{Deserialize, Serialize};

use crate::models::AttendanceRecord;

/// How absence flags affect the monthly totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbsencePolicy {
    /// Unexcused absences count as a full standard-day deficit, excused
    /// absences are neutral, and an extra/deficit total is produced.
    #[default]
    AbsenceAware,
    /// Every record counts its span minus breaks regardless of absence
    /// flags, and no extra/deficit total is produced.
    WorkedOnly,
}

/// Rules applied when turning attendance records into hour totals.
///
/// # Example
///
/// ```
/// use hours_engine::config::{AbsencePolicy, HoursPolicy};
///
/// let policy = HoursPolicy::default();
/// assert_eq!(policy.standard_day_hours, 7);
/// assert_eq!(policy.standard_day_seconds(), 25_200);
/// assert_eq!(policy.absence_policy, AbsencePolicy::AbsenceAware);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoursPolicy {
    /// Length of the standard working day, in hours.
    #[serde(default = "default_standard_day_hours")]
    pub standard_day_hours: u32,
    /// How absences are counted.
    #[serde(default)]
    pub absence_policy: AbsencePolicy,
}

fn default_standard_day_hours() -> u32 {
    7
}

impl Default for HoursPolicy {
    fn default() -> Self {
        Self {
            standard_day_hours: default_standard_day_hours(),
            absence_policy: AbsencePolicy::default(),
        }
    }
}

impl HoursPolicy {
    /// The standard day expressed in seconds.
    pub fn standard_day_seconds(&self) -> i64 {
        i64::from(self.standard_day_hours) * 3600
    }

    /// Whether summaries carry an extra/deficit total under this policy.
    pub fn tracks_extra_hours(&self) -> bool {
        self.absence_policy == AbsencePolicy::AbsenceAware
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Socket address the server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    /// Default log filter, used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            log_level: default_log_level(),
        }
    }
}

/// Contents of `engine.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerSettings,
    /// Hour accounting rules.
    #[serde(default)]
    pub hours: HoursPolicy,
}

/// Attendance records of one user in the seed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAttendance {
    /// The user the records belong to.
    pub user_id: u64,
    /// The user's attendance records.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

/// Contents of `attendance.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSnapshot {
    /// Records grouped by user.
    #[serde(default)]
    pub users: Vec<UserAttendance>,
}
