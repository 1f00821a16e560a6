//! `daily seed`: print today's seed.

use daily_core::calendar::{Clock, DailyCalendar};
use std::io::Write;
use tracing::info;

use crate::Result;

/// Writes the daily seed for the clock's date.
pub fn run<W: Write>(out: &mut W, calendar: &DailyCalendar, clock: &dyn Clock) -> Result<()> {
    let seed = calendar.daily_seed(clock);
    info!(seed, encoding = %calendar.seed_encoding(), "daily seed");
    writeln!(out, "{}", seed)?;
    Ok(())
}
