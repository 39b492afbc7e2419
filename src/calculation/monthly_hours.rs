//! Monthly worked and extra hours aggregation.
//!
//! This module groups a user's attendance records by calendar month and
//! derives, for each month, the total time worked and the surplus or deficit
//! against the standard working day.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::config::{AbsencePolicy, HoursPolicy};
use crate::models::{AttendanceRecord, MonthlySummary};

use super::duration_format::format_duration;

/// What a single attendance record adds to its month's totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayContribution {
    /// Seconds added to the worked total.
    pub worked_seconds: i64,
    /// Seconds added to the extra/deficit total (negative for a deficit).
    pub extra_seconds: i64,
}

/// Computes what one record contributes under the given policy.
///
/// Under [`AbsencePolicy::AbsenceAware`]:
/// - an excused absence contributes nothing to either total;
/// - an unexcused absence contributes no worked time and a full standard day
///   of deficit;
/// - any other record contributes its worked seconds (span minus breaks),
///   and that value minus the standard day to the extra total.
///
/// Under [`AbsencePolicy::WorkedOnly`] every record contributes its worked
/// seconds and the extra total stays at zero.
///
/// Missing entry or exit times count as a zero span. Inverted intervals are
/// not rejected here and yield negative contributions.
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::record_contribution;
/// use hours_engine::config::HoursPolicy;
/// use hours_engine::models::AttendanceRecord;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let record = AttendanceRecord::new(
///     NaiveDate::from_ymd_opt(2023, 9, 1).unwrap(),
///     NaiveTime::from_hms_opt(0, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(1, 0, 0).unwrap(),
/// );
/// let contribution = record_contribution(&record, &HoursPolicy::default());
/// assert_eq!(contribution.worked_seconds, 3600);
/// assert_eq!(contribution.extra_seconds, -6 * 3600);
/// ```
pub fn record_contribution(record: &AttendanceRecord, policy: &HoursPolicy) -> DayContribution {
    match policy.absence_policy {
        AbsencePolicy::WorkedOnly => DayContribution {
            worked_seconds: record.worked_seconds(),
            extra_seconds: 0,
        },
        AbsencePolicy::AbsenceAware => {
            if record.excused_absence {
                DayContribution::default()
            } else if record.is_unexcused_absence() {
                DayContribution {
                    worked_seconds: 0,
                    extra_seconds: -policy.standard_day_seconds(),
                }
            } else {
                let worked = record.worked_seconds();
                DayContribution {
                    worked_seconds: worked,
                    extra_seconds: worked - policy.standard_day_seconds(),
                }
            }
        }
    }
}

/// Aggregates records into monthly summaries using the default policy
/// (absence-aware, 7-hour standard day).
///
/// See [`compute_monthly_summaries_with_policy`].
///
/// # Examples
///
/// ```
/// use hours_engine::calculation::compute_monthly_summaries;
/// use hours_engine::models::SchoolYear;
///
/// let year = SchoolYear::parse("2023-2024").unwrap();
/// let summaries = compute_monthly_summaries(&[], year.start_date(), year.end_date());
/// assert!(summaries.is_empty());
/// ```
pub fn compute_monthly_summaries(
    records: &[AttendanceRecord],
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<MonthlySummary> {
    compute_monthly_summaries_with_policy(records, start, end, &HoursPolicy::default())
}

/// Aggregates records into one [`MonthlySummary`] per calendar month.
///
/// Records dated outside `[start, end]` are ignored. Months are taken from
/// each record's own date and emitted in ascending order; a month without
/// records produces no row. Callers must pass `start <= end`.
///
/// This is a pure function: the same input always yields the same output.
pub fn compute_monthly_summaries_with_policy(
    records: &[AttendanceRecord],
    start: NaiveDate,
    end: NaiveDate,
    policy: &HoursPolicy,
) -> Vec<MonthlySummary> {
    let mut months: BTreeMap<(i32, u32), DayContribution> = BTreeMap::new();

    for record in records
        .iter()
        .filter(|record| record.date >= start && record.date <= end)
    {
        let contribution = record_contribution(record, policy);
        let totals = months
            .entry((record.date.year(), record.date.month()))
            .or_default();
        totals.worked_seconds += contribution.worked_seconds;
        totals.extra_seconds += contribution.extra_seconds;
    }

    let tracks_extra = policy.tracks_extra_hours();

    months
        .into_iter()
        .map(|((year, month), totals)| MonthlySummary {
            month: format!("{:04}-{:02}", year, month),
            total_worked_hours: format_duration(totals.worked_seconds),
            total_extra_hours: tracks_extra.then(|| format_duration(totals.extra_seconds)),
        })
        .collect()
}
