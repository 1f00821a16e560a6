//! Clock abstraction for reading "now".
//!
//! Every date-dependent operation takes a [`Clock`] instead of reading the
//! system time directly, so tests can pin the calendar to any moment.
//!
//! # Examples
//!
//! ```
//! use daily_core::calendar::{Clock, FixedClock};
//! use daily_core::types::Date;
//!
//! let date = Date::from_ymd(2026, 1, 13).unwrap();
//! let clock = FixedClock::at(date, 23, 59, 59).unwrap();
//! assert_eq!(clock.today(), date);
//! ```

use chrono::{Local, NaiveDateTime, NaiveTime};

use crate::types::{Date, DateError};

/// Source of the current local date and time.
pub trait Clock {
    /// Returns the current local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    /// Returns the current local calendar date, time of day discarded.
    fn today(&self) -> Date {
        Date::from(self.now().date())
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    fn today(&self) -> Date {
        (**self).today()
    }
}

/// Clock backed by the host's system time in the local timezone.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a single local date-time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: NaiveDateTime,
}

impl FixedClock {
    /// Creates a clock frozen at `now`.
    pub fn new(now: NaiveDateTime) -> Self {
        Self { now }
    }

    /// Creates a clock frozen at midnight on `date`.
    pub fn at_date(date: Date) -> Self {
        Self::new(date.into_inner().and_time(NaiveTime::MIN))
    }

    /// Creates a clock frozen at `hour:minute:second` on `date`.
    ///
    /// # Errors
    /// `DateError::ParseError` when the time components are out of range.
    pub fn at(date: Date, hour: u32, minute: u32, second: u32) -> Result<Self, DateError> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            DateError::ParseError(format!("invalid time {}:{}:{}", hour, minute, second))
        })?;
        Ok(Self::new(date.into_inner().and_time(time)))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.now
    }
}
