//! Puzzle calendar: day numbers and daily seeds read through a [`Clock`].
//!
//! This module provides:
//! - `clock`: The [`Clock`] trait with [`SystemClock`] and [`FixedClock`]
//! - `day_number`: Pure day-number arithmetic against an epoch
//! - [`DailyCalendar`]: Epoch and seed encoding bundled with clock-driven queries
//!
//! # Examples
//!
//! ```
//! use daily_core::calendar::{DailyCalendar, FixedClock};
//! use daily_core::types::Date;
//!
//! let calendar = DailyCalendar::default();
//! let clock = FixedClock::at_date(Date::from_ymd(2026, 10, 18).unwrap());
//!
//! assert_eq!(calendar.day_number(&clock), 279);
//! assert_eq!(calendar.daily_seed(&clock), 20261018);
//! ```

pub mod clock;
pub mod day_number;

pub use clock::{Clock, FixedClock, SystemClock};
pub use day_number::{date_for_day, day_number, default_epoch};

use tracing::debug;

use crate::seed::SeedEncoding;
use crate::types::{Date, DateError};

/// Everything a day's puzzle is keyed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DailyInfo {
    /// Local calendar date.
    pub date: Date,
    /// 1-based day number counted from the epoch.
    pub day_number: i64,
    /// Seed derived from `date`.
    pub seed: i64,
}

/// Epoch and seed encoding for a daily puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCalendar {
    epoch: Date,
    seed_encoding: SeedEncoding,
}

impl Default for DailyCalendar {
    /// Epoch 2026-01-13 with the unpadded seed encoding.
    fn default() -> Self {
        Self::new(default_epoch())
    }
}

impl DailyCalendar {
    /// Creates a calendar counting from `epoch` with the unpadded seed encoding.
    pub fn new(epoch: Date) -> Self {
        Self {
            epoch,
            seed_encoding: SeedEncoding::default(),
        }
    }

    /// Replaces the seed encoding.
    pub fn with_seed_encoding(mut self, seed_encoding: SeedEncoding) -> Self {
        self.seed_encoding = seed_encoding;
        self
    }

    /// Returns the epoch (day 1).
    #[inline]
    pub fn epoch(&self) -> Date {
        self.epoch
    }

    /// Returns the seed encoding.
    #[inline]
    pub fn seed_encoding(&self) -> SeedEncoding {
        self.seed_encoding
    }

    /// Returns today's day number according to `clock`.
    pub fn day_number<C: Clock + ?Sized>(&self, clock: &C) -> i64 {
        let today = clock.today();
        let day = day_number(self.epoch, today);
        debug!(epoch = %self.epoch, %today, day, "computed day number");
        day
    }

    /// Returns today's seed according to `clock`.
    pub fn daily_seed<C: Clock + ?Sized>(&self, clock: &C) -> i64 {
        let today = clock.today();
        let seed = self.seed_encoding.encode(today);
        debug!(%today, encoding = %self.seed_encoding, seed, "computed daily seed");
        seed
    }

    /// Returns the date, day number and seed for today.
    ///
    /// The clock is read once, so all three values describe the same date
    /// even when called across midnight.
    pub fn today<C: Clock + ?Sized>(&self, clock: &C) -> DailyInfo {
        self.info_for(clock.today())
    }

    /// Returns the date, day number and seed for `date`.
    pub fn info_for(&self, date: Date) -> DailyInfo {
        DailyInfo {
            date,
            day_number: day_number(self.epoch, date),
            seed: self.seed_encoding.encode(date),
        }
    }

    /// Returns the calendar date carrying day number `day`.
    pub fn date_for_day(&self, day: i64) -> Result<Date, DateError> {
        date_for_day(self.epoch, day)
    }
}
