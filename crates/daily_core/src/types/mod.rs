//! Core calendar and error types.
//!
//! This module provides:
//! - `time`: The `Date` calendar type used by every daily calculation
//! - `error`: Structured error types for date and seed-encoding operations
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`Date`] from `time`
//! - [`DateError`], [`SeedEncodingError`] from `error`

pub mod error;
pub mod time;

pub use error::{DateError, SeedEncodingError};
pub use time::Date;
