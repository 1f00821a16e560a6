//! Day numbering relative to a fixed epoch.
//!
//! The epoch itself is day 1, the following calendar day is day 2, and so on.
//! Dates before the epoch yield 0 or negative numbers; no range check is made.

use crate::types::{Date, DateError};

/// Year of the default puzzle epoch.
pub const DEFAULT_EPOCH_YEAR: i32 = 2026;
/// Month of the default puzzle epoch.
pub const DEFAULT_EPOCH_MONTH: u32 = 1;
/// Day of the default puzzle epoch.
pub const DEFAULT_EPOCH_DAY: u32 = 13;

/// Returns the default puzzle epoch, 2026-01-13.
pub fn default_epoch() -> Date {
    // Constant components: the fallback is never taken.
    Date::from_ymd(DEFAULT_EPOCH_YEAR, DEFAULT_EPOCH_MONTH, DEFAULT_EPOCH_DAY)
        .unwrap_or_else(|_| Date::from(chrono::NaiveDate::MIN))
}

/// Returns the 1-based day number of `today` counted from `epoch`.
///
/// # Examples
///
/// ```
/// use daily_core::calendar::day_number;
/// use daily_core::types::Date;
///
/// let epoch = Date::from_ymd(2026, 1, 13).unwrap();
/// assert_eq!(day_number(epoch, epoch), 1);
/// assert_eq!(day_number(epoch, Date::from_ymd(2026, 1, 14).unwrap()), 2);
/// assert_eq!(day_number(epoch, Date::from_ymd(2026, 1, 12).unwrap()), 0);
/// ```
#[inline]
pub fn day_number(epoch: Date, today: Date) -> i64 {
    (today - epoch) + 1
}

/// Returns the calendar date carrying day number `day`.
///
/// Inverse of [`day_number`]: `day_number(epoch, date_for_day(epoch, n)?) == n`.
///
/// # Errors
/// `DateError::OutOfRange` when the date is not representable.
///
/// # Examples
///
/// ```
/// use daily_core::calendar::date_for_day;
/// use daily_core::types::Date;
///
/// let epoch = Date::from_ymd(2026, 1, 13).unwrap();
/// assert_eq!(date_for_day(epoch, 1).unwrap(), epoch);
/// assert_eq!(date_for_day(epoch, 20).unwrap(), Date::from_ymd(2026, 2, 1).unwrap());
/// ```
pub fn date_for_day(epoch: Date, day: i64) -> Result<Date, DateError> {
    let offset = day.checked_sub(1).ok_or_else(|| DateError::OutOfRange {
        from: epoch.to_string(),
        days: day,
    })?;
    epoch.add_days(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::clock::{Clock, FixedClock};

    fn epoch() -> Date {
        Date::from_ymd(2026, 1, 13).unwrap()
    }

    #[test]
    fn test_default_epoch() {
        assert_eq!(default_epoch(), epoch());
    }

    #[test]
    fn test_epoch_is_day_one() {
        assert_eq!(day_number(epoch(), epoch()), 1);
    }

    #[test]
    fn test_known_days() {
        let cases = [
            ((2026, 1, 14), 2),
            ((2026, 2, 1), 20),
            ((2026, 10, 18), 279),
            ((2027, 1, 13), 366),
        ];
        for ((y, m, d), expected) in cases {
            let today = Date::from_ymd(y, m, d).unwrap();
            assert_eq!(day_number(epoch(), today), expected, "{}", today);
        }
    }

    #[test]
    fn test_before_epoch_is_not_an_error() {
        assert_eq!(day_number(epoch(), Date::from_ymd(2026, 1, 12).unwrap()), 0);
        assert_eq!(day_number(epoch(), Date::from_ymd(2026, 1, 1).unwrap()), -11);
    }

    #[test]
    fn test_time_of_day_invariance() {
        let date = Date::from_ymd(2026, 6, 1).unwrap();
        let early = FixedClock::at(date, 0, 0, 1).unwrap();
        let late = FixedClock::at(date, 23, 59, 59).unwrap();
        assert_eq!(
            day_number(epoch(), early.today()),
            day_number(epoch(), late.today())
        );
    }

    #[test]
    fn test_days_across_spring_dst_change() {
        // Elapsed-hours arithmetic loses an hour here; calendar arithmetic does not.
        let saturday = Date::from_ymd(2026, 3, 28).unwrap();
        let monday = Date::from_ymd(2026, 3, 30).unwrap();
        assert_eq!(day_number(epoch(), monday) - day_number(epoch(), saturday), 2);
    }

    #[test]
    fn test_date_for_day_roundtrip() {
        for n in [-400, -1, 0, 1, 2, 279, 10_000] {
            let date = date_for_day(epoch(), n).unwrap();
            assert_eq!(day_number(epoch(), date), n);
        }
    }

    #[test]
    fn test_date_for_day_overflow() {
        assert!(date_for_day(epoch(), i64::MIN).is_err());
        assert!(date_for_day(epoch(), i64::MAX).is_err());
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_consecutive_days_advance_by_one(offset in -50_000i64..50_000) {
                let today = epoch().add_days(offset).unwrap();
                let tomorrow = today.add_days(1).unwrap();
                prop_assert_eq!(
                    day_number(epoch(), tomorrow),
                    day_number(epoch(), today) + 1
                );
            }

            #[test]
            fn test_date_for_day_inverts_day_number(day in -50_000i64..50_000) {
                let date = date_for_day(epoch(), day).unwrap();
                prop_assert_eq!(day_number(epoch(), date), day);
            }

            #[test]
            fn test_hour_never_changes_day_number(
                offset in 0i64..5_000,
                hour in 0u32..24,
                minute in 0u32..60,
            ) {
                let date = epoch().add_days(offset).unwrap();
                let clock = FixedClock::at(date, hour, minute, 0).unwrap();
                prop_assert_eq!(day_number(epoch(), clock.today()), offset + 1);
            }
        }
    }
}
