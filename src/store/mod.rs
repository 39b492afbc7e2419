//! Attendance data access.
//!
//! The aggregation works on a snapshot of records handed to it by an
//! [`AttendanceSource`]. This module defines that seam and an in-memory
//! implementation seeded from configuration.

mod memory;

use chrono::NaiveDate;

use crate::error::EngineResult;
use crate::models::AttendanceRecord;

pub use memory::InMemoryAttendance;

/// Supplies attendance records for one user over a date range.
///
/// Implementations return each record with its breaks already attached,
/// ordered by date, restricted to `[start, end]` inclusive. A user with no
/// records yields an empty vector, not an error.
pub trait AttendanceSource: Send + Sync {
    /// Returns the user's records dated within `[start, end]`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::DataAccess`](crate::error::EngineError::DataAccess)
    /// when the backing store cannot be read.
    fn records_between(
        &self,
        user_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;
}
