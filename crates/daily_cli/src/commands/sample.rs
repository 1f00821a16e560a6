//! `daily sample`: print the first values of a seeded stream.
//!
//! The seed is either given explicitly or derived from the clock's date,
//! so `daily sample --date 2026-10-18` shows exactly what that day's
//! puzzle generator will draw.

use daily_core::calendar::{Clock, DailyCalendar};
use daily_rng::Mulberry32;
use serde::Serialize;
use std::io::Write;
use tracing::info;

use super::OutputFormat;
use crate::{CliError, Result};

/// Upper bound on `--count`.
pub const MAX_SAMPLES: usize = 1_000_000;

#[derive(Debug, Serialize)]
struct SampleReport {
    seed: i64,
    values: Vec<f64>,
}

/// Resolves the seed: explicit when given, otherwise the daily seed.
pub fn resolve_seed(seed: Option<i64>, calendar: &DailyCalendar, clock: &dyn Clock) -> i64 {
    seed.unwrap_or_else(|| calendar.daily_seed(clock))
}

/// Writes `count` values from the stream for `seed`.
pub fn run<W: Write>(out: &mut W, seed: i64, count: usize, format: OutputFormat) -> Result<()> {
    if count > MAX_SAMPLES {
        return Err(CliError::InvalidArgument(format!(
            "count {} exceeds the maximum of {}",
            count, MAX_SAMPLES
        )));
    }

    let mut rng = Mulberry32::new(seed);
    let mut values = vec![0.0; count];
    rng.fill_uniform(&mut values);
    info!(seed, count, "sampled stream");

    match format {
        OutputFormat::Text => {
            for value in &values {
                writeln!(out, "{}", value)?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &SampleReport { seed, values })?;
            writeln!(out)?;
        }
    }
    Ok(())
}
