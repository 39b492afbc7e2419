//! Worked and extra hours engine for employee attendance.
//!
//! This crate turns a user's daily attendance records (entry/exit times,
//! breaks, absences) into per-month totals of worked time and of surplus or
//! deficit against the standard working day, over a September-to-August
//! school year.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod store;
