//! Request types for the hours engine API.
//!
//! This module defines the query string of `GET /worked-hours` and the JSON
//! body of `POST /worked-hours/calculate`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, BreakInterval};

/// Query parameters of `GET /worked-hours`.
///
/// Both fields are optional at the parsing stage so that a missing value is
/// reported with the same error as a malformed one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkedHoursQuery {
    /// The school year, `YYYY-YYYY`.
    #[serde(default)]
    pub school_year: Option<String>,
    /// The target user; required for admins, ignored for members.
    #[serde(default)]
    pub user_id: Option<String>,
}

/// Request body for `POST /worked-hours/calculate`.
///
/// Carries the records to aggregate directly instead of reading them from
/// the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// The school year, `YYYY-YYYY`.
    pub school_year: String,
    /// The attendance records to aggregate.
    #[serde(default)]
    pub records: Vec<RecordRequest>,
}

/// Attendance record in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// The date of the record.
    pub date: NaiveDate,
    /// Entry time, if recorded.
    #[serde(default)]
    pub entry_time: Option<NaiveTime>,
    /// Exit time, if recorded.
    #[serde(default)]
    pub exit_time: Option<NaiveTime>,
    /// Whether the user was absent.
    #[serde(default)]
    pub absence: bool,
    /// Whether the absence was excused.
    #[serde(default, alias = "exc_absence")]
    pub excused_absence: bool,
    /// Free-text notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Breaks taken during the day.
    #[serde(default)]
    pub breaks: Vec<BreakRequest>,
}

/// Break in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRequest {
    /// The start time of the break.
    pub start_time: NaiveTime,
    /// The end time of the break.
    pub end_time: NaiveTime,
}

impl From<RecordRequest> for AttendanceRecord {
    fn from(req: RecordRequest) -> Self {
        AttendanceRecord {
            date: req.date,
            entry_time: req.entry_time,
            exit_time: req.exit_time,
            absence: req.absence,
            excused_absence: req.excused_absence,
            notes: req.notes,
            breaks: req.breaks.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<BreakRequest> for BreakInterval {
    fn from(req: BreakRequest) -> Self {
        BreakInterval {
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_calculation_request() {
        let json = r#"{
            "school_year": "2023-2024",
            "records": [
                {
                    "date": "2023-09-04",
                    "entry_time": "09:00:00",
                    "exit_time": "17:00:00",
                    "breaks": [
                        { "start_time": "12:00:00", "end_time": "12:30:00" }
                    ]
                },
                {
                    "date": "2023-09-05",
                    "absence": true,
                    "exc_absence": false
                }
            ]
        }"#;

        let request: CalculationRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.school_year, "2023-2024");
        assert_eq!(request.records.len(), 2);
        assert_eq!(request.records[0].breaks.len(), 1);
        assert!(request.records[1].absence);
        assert_eq!(request.records[1].entry_time, None);
    }

    #[test]
    fn test_record_conversion() {
        let req = RecordRequest {
            date: NaiveDate::from_ymd_opt(2023, 9, 4).unwrap(),
            entry_time: NaiveTime::from_hms_opt(9, 0, 0),
            exit_time: NaiveTime::from_hms_opt(17, 0, 0),
            absence: false,
            excused_absence: false,
            notes: Some("training".to_string()),
            breaks: vec![BreakRequest {
                start_time: NaiveTime::from_hms_opt(12, 0, 0).unwrap(),
                end_time: NaiveTime::from_hms_opt(12, 30, 0).unwrap(),
            }],
        };

        let record: AttendanceRecord = req.into();
        assert_eq!(record.notes.as_deref(), Some("training"));
        assert_eq!(record.worked_seconds(), 7 * 3600 + 30 * 60);
    }

    #[test]
    fn test_query_uses_camel_case() {
        let query: WorkedHoursQuery =
            serde_json::from_str(r#"{ "schoolYear": "2023-2024", "userId": "1" }"#).unwrap();
        assert_eq!(query.school_year.as_deref(), Some("2023-2024"));
        assert_eq!(query.user_id.as_deref(), Some("1"));
    }
}
