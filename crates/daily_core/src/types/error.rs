//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction, parsing and day arithmetic
//! - `SeedEncodingError`: Errors from parsing a seed encoding name

use thiserror::Error;

/// Date-related errors.
///
/// Provides structured error handling for date construction and parsing
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `InvalidDate`: Invalid date components (e.g., February 30th)
/// - `ParseError`: Failed to parse date string
/// - `OutOfRange`: Day arithmetic left the representable calendar
///
/// # Examples
/// ```
/// use daily_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2026, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2026-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),

    /// Shifting a date by a number of days overflowed the calendar.
    #[error("Date out of range: {days} days from {from}")]
    OutOfRange {
        /// ISO 8601 rendering of the starting date
        from: String,
        /// Requested offset in days
        days: i64,
    },
}

/// Seed encoding parse errors.
///
/// # Examples
/// ```
/// use daily_core::types::SeedEncodingError;
///
/// let err = SeedEncodingError::Unknown("hex".to_string());
/// assert_eq!(format!("{}", err), "Unknown seed encoding: hex");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedEncodingError {
    /// The name did not match any known encoding.
    #[error("Unknown seed encoding: {0}")]
    Unknown(String),
}
