//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to a
//! caller-supplied writer so their output can be captured in tests.

pub mod date_of;
pub mod day;
pub mod sample;
pub mod seed;
pub mod today;

use daily_core::calendar::{Clock, FixedClock, SystemClock};
use daily_core::types::Date;
use tracing::debug;

use crate::Result;

/// Output format for commands that support structured output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Text,
    /// JSON document
    Json,
}

/// Returns the clock a command reads "today" from.
///
/// `--date` pins the clock to midnight of that date; otherwise the host's
/// local time is used.
pub fn clock_for(date: Option<&str>) -> Result<Box<dyn Clock>> {
    match date {
        Some(s) => {
            let date = Date::parse(s)?;
            debug!(%date, "using pinned date");
            Ok(Box::new(FixedClock::at_date(date)))
        }
        None => Ok(Box::new(SystemClock)),
    }
}
