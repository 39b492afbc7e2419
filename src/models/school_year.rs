//! School year model.
//!
//! This module contains the [`SchoolYear`] type, which turns the `YYYY-YYYY`
//! notation used by callers into the inclusive date range it denotes.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A school year running from September 1 of `first_year` to August 31 of
/// `second_year`, inclusive.
///
/// # Example
///
/// ```
/// use hours_engine::models::SchoolYear;
/// use chrono::NaiveDate;
///
/// let year = SchoolYear::parse("2023-2024").unwrap();
/// assert_eq!(year.start_date(), NaiveDate::from_ymd_opt(2023, 9, 1).unwrap());
/// assert_eq!(year.end_date(), NaiveDate::from_ymd_opt(2024, 8, 31).unwrap());
/// assert!(year.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
/// assert!(!year.contains(NaiveDate::from_ymd_opt(2022, 12, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SchoolYear {
    first_year: i32,
    second_year: i32,
}

impl SchoolYear {
    /// Parses the strict `YYYY-YYYY` notation.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidSchoolYear`] if the input is not exactly
    /// four digits, a dash and four digits, or if the second year is not after
    /// the first (the range would end before it starts).
    pub fn parse(value: &str) -> EngineResult<Self> {
        let invalid = |message: &str| EngineError::InvalidSchoolYear {
            value: value.to_string(),
            message: message.to_string(),
        };

        let bytes = value.as_bytes();
        let well_formed = bytes.len() == 9
            && bytes[4] == b'-'
            && bytes[..4].iter().all(u8::is_ascii_digit)
            && bytes[5..].iter().all(u8::is_ascii_digit);
        if !well_formed {
            return Err(invalid("expected format YYYY-YYYY"));
        }

        let first_year: i32 = value[..4]
            .parse()
            .map_err(|_| invalid("expected format YYYY-YYYY"))?;
        let second_year: i32 = value[5..]
            .parse()
            .map_err(|_| invalid("expected format YYYY-YYYY"))?;

        if second_year <= first_year {
            return Err(invalid("second year must be after the first"));
        }

        Ok(Self {
            first_year,
            second_year,
        })
    }

    /// September 1 of the first year.
    pub fn start_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.first_year, 9, 1).unwrap_or(NaiveDate::MIN)
    }

    /// August 31 of the second year.
    pub fn end_date(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.second_year, 8, 31).unwrap_or(NaiveDate::MAX)
    }

    /// Checks whether a date falls within the school year (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date() && date <= self.end_date()
    }
}

impl FromStr for SchoolYear {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for SchoolYear {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<SchoolYear> for String {
    fn from(year: SchoolYear) -> Self {
        year.to_string()
    }
}

impl fmt::Display for SchoolYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:04}", self.first_year, self.second_year)
    }
}
