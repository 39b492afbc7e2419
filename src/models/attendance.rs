//! Attendance record model and related types.
//!
//! This module defines the [`AttendanceRecord`] and [`BreakInterval`] structs
//! for representing one user's attendance on one day.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// A break taken during an attendance day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakInterval {
    /// The time the break started.
    pub start_time: NaiveTime,
    /// The time the break ended.
    pub end_time: NaiveTime,
}

impl BreakInterval {
    /// Returns the duration of the break in seconds.
    ///
    /// Negative when the break ends before it starts.
    pub fn duration_seconds(&self) -> i64 {
        (self.end_time - self.start_time).num_seconds()
    }
}

/// One user's attendance on one calendar date.
///
/// Entry and exit times are optional; a record may exist only to carry an
/// absence flag or a note. The owning store keeps one record per
/// (user, date).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// The calendar date of the record.
    pub date: NaiveDate,
    /// The time the user arrived, if recorded.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// The time the user left, if recorded.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
    /// Whether the user was absent.
    #[serde(default)]
    pub absence: bool,
    /// Whether the absence was excused.
    #[serde(default, alias = "exc_absence")]
    pub excused_absence: bool,
    /// Free-text notes attached to the day.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Breaks taken during the day.
    #[serde(default)]
    pub breaks: Vec<BreakInterval>,
}

impl AttendanceRecord {
    /// Creates a plain attendance day with entry and exit times and no breaks.
    pub fn new(date: NaiveDate, entry_time: NaiveTime, exit_time: NaiveTime) -> Self {
        Self {
            date,
            entry_time: Some(entry_time),
            exit_time: Some(exit_time),
            absence: false,
            excused_absence: false,
            notes: None,
            breaks: vec![],
        }
    }

    /// Seconds between entry and exit.
    ///
    /// Returns 0 when either time is missing.
    pub fn span_seconds(&self) -> i64 {
        match (self.entry_time, self.exit_time) {
            (Some(entry), Some(exit)) => (exit - entry).num_seconds(),
            _ => 0,
        }
    }

    /// Total seconds spent on breaks.
    pub fn break_seconds(&self) -> i64 {
        self.breaks.iter().map(BreakInterval::duration_seconds).sum()
    }

    /// Seconds worked: the entry/exit span minus all breaks.
    ///
    /// Absence flags are not considered here; see
    /// [`record_contribution`](crate::calculation::record_contribution).
    ///
    /// # Examples
    ///
    /// ```
    /// use hours_engine::models::{AttendanceRecord, BreakInterval};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let time = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    /// let mut record = AttendanceRecord::new(
    ///     NaiveDate::from_ymd_opt(2023, 9, 4).unwrap(),
    ///     time(9, 0),
    ///     time(17, 0),
    /// );
    /// record.breaks.push(BreakInterval { start_time: time(12, 0), end_time: time(12, 30) });
    /// assert_eq!(record.worked_seconds(), 7 * 3600 + 30 * 60);
    /// ```
    pub fn worked_seconds(&self) -> i64 {
        self.span_seconds() - self.break_seconds()
    }

    /// True when the user was absent and the absence was not excused.
    pub fn is_unexcused_absence(&self) -> bool {
        self.absence && !self.excused_absence
    }
}
