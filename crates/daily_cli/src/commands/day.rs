//! `daily day`: print today's puzzle number.

use daily_core::calendar::{Clock, DailyCalendar};
use std::io::Write;
use tracing::info;

use crate::Result;

/// Writes the day number for the clock's date.
pub fn run<W: Write>(out: &mut W, calendar: &DailyCalendar, clock: &dyn Clock) -> Result<()> {
    let day = calendar.day_number(clock);
    info!(day, epoch = %calendar.epoch(), "day number");
    writeln!(out, "{}", day)?;
    Ok(())
}
