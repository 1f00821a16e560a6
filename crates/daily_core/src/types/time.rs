//! Calendar date type for daily puzzle calculations.
//!
//! This module provides:
//! - `Date`: Type-safe date wrapper around chrono::NaiveDate
//! - Signed day differences and checked day offsets
//!
//! A `Date` carries no time of day and no timezone. Anything read from a
//! wall clock is reduced to its local calendar date before it becomes a
//! `Date`, which is what makes day numbers independent of the hour.
//!
//! # Examples
//!
//! ```
//! use daily_core::types::time::Date;
//!
//! let epoch = Date::from_ymd(2026, 1, 13).unwrap();
//! let later = Date::from_ymd(2026, 3, 1).unwrap();
//!
//! assert_eq!(later - epoch, 47);
//! assert_eq!(epoch.add_days(47).unwrap(), later);
//! ```

use chrono::{Datelike, Duration, Local, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 formatting and calendar arithmetic. Subtraction
/// counts calendar days, never elapsed seconds, so daylight-saving
/// transitions cannot shift the result.
///
/// # Examples
///
/// ```
/// use daily_core::types::time::Date;
///
/// // Create from year, month, day
/// let date = Date::from_ymd(2026, 10, 18).unwrap();
/// assert_eq!(date.year(), 2026);
/// assert_eq!(date.month(), 10);
/// assert_eq!(date.day(), 18);
///
/// // Parse from ISO 8601 string
/// let parsed: Date = "2026-10-18".parse().unwrap();
/// assert_eq!(date, parsed);
///
/// // Calculate days between dates
/// let start = Date::from_ymd(2026, 1, 13).unwrap();
/// let end = Date::from_ymd(2026, 1, 23).unwrap();
/// assert_eq!(end - start, 10);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Arguments
    /// * `year` - Year (e.g., 2026)
    /// * `month` - Month (1-12)
    /// * `day` - Day (1-31, depending on month)
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_core::types::time::Date;
    ///
    /// // Leap year February 29th
    /// let leap = Date::from_ymd(2028, 2, 29).unwrap();
    ///
    /// // Invalid date returns error
    /// let invalid = Date::from_ymd(2026, 2, 29);
    /// assert!(invalid.is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Returns today's date based on local system time.
    pub fn today() -> Self {
        Date(Local::now().date_naive())
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_core::types::time::Date;
    ///
    /// let date = Date::parse("2026-01-13").unwrap();
    /// assert_eq!(date.day(), 13);
    ///
    /// assert!(Date::parse("13/01/2026").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("{}: {}", s, e)))
    }

    /// Returns the underlying NaiveDate.
    ///
    /// Use this method when you need access to chrono's full API.
    pub fn into_inner(self) -> NaiveDate {
        self.0
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the date `days` calendar days after `self` (before it when negative).
    ///
    /// # Errors
    /// `DateError::OutOfRange` when the result is not representable.
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_core::types::time::Date;
    ///
    /// let date = Date::from_ymd(2026, 2, 28).unwrap();
    /// assert_eq!(date.add_days(1).unwrap(), Date::from_ymd(2026, 3, 1).unwrap());
    /// assert_eq!(date.add_days(-59).unwrap(), Date::from_ymd(2025, 12, 31).unwrap());
    /// assert!(date.add_days(i64::MAX).is_err());
    /// ```
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Date)
            .ok_or_else(|| DateError::OutOfRange {
                from: self.to_string(),
                days,
            })
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of calendar days between two dates.
    ///
    /// The result is positive if `self` is after `other`, negative otherwise.
    fn sub(self, other: Self) -> i64 {
        self.0.signed_duration_since(other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    fn from_str(s: &str) -> Result<Self, DateError> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    /// Formats the date as ISO 8601 (YYYY-MM-DD).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
