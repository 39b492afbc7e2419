//! Monthly summary model.
//!
//! This module contains the [`MonthlySummary`] type produced by the hours
//! aggregation: one row per calendar month with formatted totals.

use serde::{Deserialize, Serialize};

/// Worked and extra hours for one calendar month.
///
/// Totals are already formatted as `HH:MM` strings, with a leading `-` on
/// `total_extra_hours` when the month ran a deficit.
///
/// # Example
///
/// ```
/// use hours_engine::models::MonthlySummary;
///
/// let summary = MonthlySummary {
///     month: "2023-09".to_string(),
///     total_worked_hours: "01:00".to_string(),
///     total_extra_hours: Some("-06:00".to_string()),
/// };
/// let json = serde_json::to_value(&summary).unwrap();
/// assert_eq!(json["total_extra_hours"], "-06:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The calendar month, formatted `YYYY-MM`.
    pub month: String,
    /// Total worked time, formatted `HH:MM`.
    pub total_worked_hours: String,
    /// Total extra (or deficit) time against the standard day, formatted
    /// `[-]HH:MM`. `None` when the active policy does not track extra hours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_extra_hours: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_all_fields() {
        let summary = MonthlySummary {
            month: "2023-10".to_string(),
            total_worked_hours: "120:00".to_string(),
            total_extra_hours: Some("-03:30".to_string()),
        };

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "month": "2023-10",
                "total_worked_hours": "120:00",
                "total_extra_hours": "-03:30"
            })
        );
    }

    #[test]
    fn test_omits_extra_hours_when_untracked() {
        let summary = MonthlySummary {
            month: "2023-10".to_string(),
            total_worked_hours: "02:00".to_string(),
            total_extra_hours: None,
        };

        let json = serde_json::to_string(&summary).unwrap();
        assert!(!json.contains("total_extra_hours"));
    }
}
