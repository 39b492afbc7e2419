//! Calculation logic for the hours engine.
//!
//! This module contains the duration formatting used in summaries, the
//! per-record contribution rules (including absence handling), the monthly
//! aggregation over a school year, and interval checks that callers can run
//! before aggregating.

mod duration_format;
mod interval_validation;
mod monthly_hours;

pub use duration_format::{SECONDS_PER_HOUR, format_duration};
pub use interval_validation::{validate_record, validate_records};
pub use monthly_hours::{
    DayContribution, compute_monthly_summaries, compute_monthly_summaries_with_policy,
    record_contribution,
};
