//! Interval checks for attendance records.
//!
//! The aggregation propagates inverted intervals as negative time. These
//! checks let a caller reject such records before aggregating.

use crate::error::{EngineError, EngineResult};
use crate::models::AttendanceRecord;

/// Checks that a record's exit is not before its entry and that none of its
/// breaks end before they start.
///
/// Records with a missing entry or exit time pass the entry/exit check.
///
/// # Errors
///
/// Returns [`EngineError::InvalidInterval`] for the first inverted interval.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::validate_record;
/// use hours_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = AttendanceRecord::new(
///     NaiveDate::from_ymd_opt(2023, 9, 4).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
/// );
/// assert!(validate_record(&record).is_err());
/// ```
pub fn validate_record(record: &AttendanceRecord) -> EngineResult<()> {
    if let (Some(entry), Some(exit)) = (record.entry_time, record.exit_time)
        && exit < entry
    {
        return Err(EngineError::InvalidInterval {
            date: record.date,
            message: format!("exit time {} is before entry time {}", exit, entry),
        });
    }

    for interval in &record.breaks {
        if interval.end_time < interval.start_time {
            return Err(EngineError::InvalidInterval {
                date: record.date,
                message: format!(
                    "break end time {} is before start time {}",
                    interval.end_time, interval.start_time
                ),
            });
        }
    }

    Ok(())
}

/// Runs [`validate_record`] over every record, stopping at the first failure.
pub fn validate_records<'a>(
    records: impl IntoIterator<Item = &'a AttendanceRecord>,
) -> EngineResult<()> {
    records.into_iter().try_for_each(validate_record)
}
