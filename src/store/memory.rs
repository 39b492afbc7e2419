//! In-memory attendance store.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use tracing::debug;

use crate::config::AttendanceSnapshot;
use crate::error::EngineResult;
use crate::models::AttendanceRecord;

use super::AttendanceSource;

/// Attendance records held in memory, keyed by user and date.
///
/// The store is read-only once seeded. It holds at most one record per
/// (user, date); a later snapshot entry for the same date replaces an
/// earlier one.
///
/// # Example
///
/// ```
/// use hours_engine::config::{AttendanceSnapshot, UserAttendance};
/// use hours_engine::models::AttendanceRecord;
/// use hours_engine::store::{AttendanceSource, InMemoryAttendance};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2023, 9, 4).unwrap();
/// let snapshot = AttendanceSnapshot {
///     users: vec![UserAttendance {
///         user_id: 1,
///         records: vec![AttendanceRecord::new(
///             date,
///             NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///             NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///         )],
///     }],
/// };
///
/// let store = InMemoryAttendance::from_snapshot(&snapshot);
/// let records = store.records_between(1, date, date).unwrap();
/// assert_eq!(records.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryAttendance {
    users: HashMap<u64, BTreeMap<NaiveDate, AttendanceRecord>>,
}

impl InMemoryAttendance {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding every record of the snapshot.
    pub fn from_snapshot(snapshot: &AttendanceSnapshot) -> Self {
        let mut store = Self::new();
        for user in &snapshot.users {
            for record in &user.records {
                store.upsert(user.user_id, record.clone());
            }
        }
        debug!(users = store.users.len(), "Attendance store seeded");
        store
    }

    // Breaks are kept ordered by start time.
    fn upsert(&mut self, user_id: u64, mut record: AttendanceRecord) {
        record.breaks.sort_by_key(|interval| interval.start_time);
        self.users
            .entry(user_id)
            .or_default()
            .insert(record.date, record);
    }
}

impl AttendanceSource for InMemoryAttendance {
    fn records_between(
        &self,
        user_id: u64,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let Some(records) = self.users.get(&user_id) else {
            return Ok(Vec::new());
        };
        if start > end {
            return Ok(Vec::new());
        }

        Ok(records
            .range(start..=end)
            .map(|(_, record)| record.clone())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserAttendance;
    use crate::models::BreakInterval;
    use chrono::NaiveTime;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn make_time(time_str: &str) -> NaiveTime {
        NaiveTime::parse_from_str(time_str, "%H:%M:%S").unwrap()
    }

    fn make_record(date: &str, entry: &str, exit: &str) -> AttendanceRecord {
        AttendanceRecord::new(make_date(date), make_time(entry), make_time(exit))
    }

    fn store_for(user_id: u64, records: Vec<AttendanceRecord>) -> InMemoryAttendance {
        InMemoryAttendance::from_snapshot(&AttendanceSnapshot {
            users: vec![UserAttendance { user_id, records }],
        })
    }

    fn whole_year(store: &InMemoryAttendance, user_id: u64) -> Vec<AttendanceRecord> {
        store
            .records_between(user_id, make_date("2023-09-01"), make_date("2024-08-31"))
            .unwrap()
    }

    #[test]
    fn test_later_record_replaces_same_date() {
        let store = store_for(
            1,
            vec![
                make_record("2023-09-04", "09:00:00", "17:00:00"),
                make_record("2023-09-04", "10:00:00", "17:00:00"),
            ],
        );

        let records = whole_year(&store, 1);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].entry_time, Some(make_time("10:00:00")));
    }

    #[test]
    fn test_records_are_ordered_and_filtered_by_range() {
        let store = store_for(
            1,
            vec![
                make_record("2023-10-02", "09:00:00", "17:00:00"),
                make_record("2023-08-31", "09:00:00", "17:00:00"),
                make_record("2023-09-01", "09:00:00", "17:00:00"),
            ],
        );

        let dates: Vec<NaiveDate> = whole_year(&store, 1).iter().map(|r| r.date).collect();
        assert_eq!(dates, vec![make_date("2023-09-01"), make_date("2023-10-02")]);
    }

    #[test]
    fn test_users_are_isolated() {
        let store = store_for(1, vec![make_record("2023-09-04", "09:00:00", "17:00:00")]);

        assert!(whole_year(&store, 2).is_empty());
    }

    #[test]
    fn test_inverted_range_is_empty() {
        let store = store_for(1, vec![make_record("2023-09-04", "09:00:00", "17:00:00")]);

        let records = store
            .records_between(1, make_date("2024-08-31"), make_date("2023-09-01"))
            .unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_breaks_are_sorted_on_insert() {
        let mut record = make_record("2023-09-04", "09:00:00", "17:00:00");
        record.breaks = vec![
            BreakInterval {
                start_time: make_time("15:00:00"),
                end_time: make_time("15:15:00"),
            },
            BreakInterval {
                start_time: make_time("10:00:00"),
                end_time: make_time("10:15:00"),
            },
        ];

        let store = store_for(1, vec![record]);

        let date = make_date("2023-09-04");
        let records = store.records_between(1, date, date).unwrap();
        assert_eq!(records[0].breaks[0].start_time, make_time("10:00:00"));
    }

    #[test]
    fn test_from_snapshot() {
        let snapshot = AttendanceSnapshot {
            users: vec![
                UserAttendance {
                    user_id: 1,
                    records: vec![make_record("2023-09-04", "09:00:00", "17:00:00")],
                },
                UserAttendance {
                    user_id: 2,
                    records: vec![
                        make_record("2023-09-04", "09:00:00", "17:00:00"),
                        make_record("2023-09-05", "09:00:00", "17:00:00"),
                    ],
                },
            ],
        };

        let store = InMemoryAttendance::from_snapshot(&snapshot);
        assert_eq!(whole_year(&store, 1).len(), 1);
        assert_eq!(whole_year(&store, 2).len(), 2);
    }

    #[test]
    fn test_empty_store_returns_no_records() {
        assert!(whole_year(&InMemoryAttendance::new(), 1).is_empty());
    }
}
