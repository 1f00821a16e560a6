//! # daily_core: Calendar Foundation for Daily Puzzles
//!
//! ## Layer 1 (Foundation) Role
//!
//! daily_core is the bottom layer of the workspace, providing:
//! - Calendar date type: `Date` (`types::time`)
//! - Error types: `DateError`, `SeedEncodingError` (`types::error`)
//! - Injectable clocks: `Clock`, `SystemClock`, `FixedClock` (`calendar::clock`)
//! - Day numbering against a fixed epoch (`calendar::day_number`)
//! - Date-derived seeds: `daily_seed`, `SeedEncoding` (`seed`)
//!
//! ## Minimal Dependencies
//!
//! daily_core has no dependencies on other daily_* crates:
//! - chrono: Calendar arithmetic and local time
//! - thiserror: Error derivation
//! - tracing: Debug-level events from `DailyCalendar`
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use daily_core::calendar::{DailyCalendar, FixedClock, SystemClock};
//! use daily_core::types::Date;
//!
//! let calendar = DailyCalendar::default();
//!
//! // Deterministic: pin the clock
//! let clock = FixedClock::at_date(Date::from_ymd(2026, 1, 13).unwrap());
//! assert_eq!(calendar.day_number(&clock), 1);
//! assert_eq!(calendar.daily_seed(&clock), 2026113);
//!
//! // Live: read the host's local time
//! let _today = calendar.today(&SystemClock);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `Date`, `SeedEncoding` and `DailyInfo`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod calendar;
pub mod seed;
pub mod types;
