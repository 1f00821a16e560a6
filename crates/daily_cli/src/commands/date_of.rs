//! `daily date-of <N>`: print the calendar date of puzzle day N.

use daily_core::calendar::DailyCalendar;
use std::io::Write;
use tracing::info;

use crate::Result;

/// Writes the date carrying day number `day`.
pub fn run<W: Write>(out: &mut W, calendar: &DailyCalendar, day: i64) -> Result<()> {
    let date = calendar.date_for_day(day)?;
    info!(day, %date, "date of day");
    writeln!(out, "{}", date)?;
    Ok(())
}
