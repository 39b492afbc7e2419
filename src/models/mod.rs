//! Core data models for the hours engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod monthly_summary;
mod school_year;

pub use attendance::{AttendanceRecord, BreakInterval};
pub use monthly_summary::MonthlySummary;
pub use school_year::SchoolYear;
