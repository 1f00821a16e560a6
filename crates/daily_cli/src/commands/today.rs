//! `daily today`: print date, day number and seed together.

use daily_core::calendar::{Clock, DailyCalendar};
use std::io::Write;
use tracing::info;

use super::OutputFormat;
use crate::Result;

/// Writes today's date, day number and seed.
pub fn run<W: Write>(
    out: &mut W,
    calendar: &DailyCalendar,
    clock: &dyn Clock,
    format: OutputFormat,
) -> Result<()> {
    let info = calendar.today(clock);
    info!(date = %info.date, day = info.day_number, seed = info.seed, "today");

    match format {
        OutputFormat::Text => {
            writeln!(out, "Date:  {}", info.date)?;
            writeln!(out, "Day:   {}", info.day_number)?;
            writeln!(out, "Seed:  {}", info.seed)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &info)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
