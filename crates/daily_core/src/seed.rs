//! Date-derived daily seeds.
//!
//! The seed for a date is its year, month and day written as decimal digits
//! and read back as one integer. The default [`SeedEncoding::Unpadded`] writes
//! month and day without leading zeros, so 2026-03-07 becomes `202637` and
//! 2026-10-18 becomes `20261018`. This encoding is not injective across all
//! dates (2026-1-13 and 2026-11-3 both give `2026113`); puzzles already keyed
//! on it depend on the exact values, so it stays the default.
//! [`SeedEncoding::ZeroPadded`] gives the unambiguous `YYYYMMDD` form.
//!
//! # Examples
//!
//! ```
//! use daily_core::seed::{daily_seed, daily_seed_with, SeedEncoding};
//! use daily_core::types::Date;
//!
//! let date = Date::from_ymd(2026, 3, 7).unwrap();
//! assert_eq!(daily_seed(date), 202637);
//! assert_eq!(daily_seed_with(date, SeedEncoding::ZeroPadded), 20260307);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::types::{Date, SeedEncodingError};

/// Digit layout used to turn a date into a seed.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SeedEncoding {
    /// Year, month and day concatenated without padding (`2026` `3` `7` → `202637`).
    #[default]
    Unpadded,

    /// Fixed-width `YYYYMMDD` (`2026-03-07` → `20260307`).
    ZeroPadded,
}

impl SeedEncoding {
    /// Returns the canonical encoding name.
    ///
    /// # Examples
    ///
    /// ```
    /// use daily_core::seed::SeedEncoding;
    ///
    /// assert_eq!(SeedEncoding::Unpadded.name(), "unpadded");
    /// assert_eq!(SeedEncoding::ZeroPadded.name(), "zero-padded");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            SeedEncoding::Unpadded => "unpadded",
            SeedEncoding::ZeroPadded => "zero-padded",
        }
    }

    /// Encodes `date` as a seed.
    pub fn encode(&self, date: Date) -> i64 {
        let (month, day) = (date.month() as i64, date.day() as i64);
        let (month_width, day_width) = match self {
            SeedEncoding::Unpadded => (decimal_width(month), decimal_width(day)),
            SeedEncoding::ZeroPadded => (2, 2),
        };

        let year = date.year() as i64;
        let magnitude = year.abs() * 10i64.pow(month_width + day_width)
            + month * 10i64.pow(day_width)
            + day;
        // A negative year contributes a leading minus sign to the digit string.
        if year < 0 {
            -magnitude
        } else {
            magnitude
        }
    }
}

/// Number of decimal digits in a positive calendar component.
fn decimal_width(value: i64) -> u32 {
    if value >= 10 {
        2
    } else {
        1
    }
}

impl FromStr for SeedEncoding {
    type Err = SeedEncodingError;

    /// Parses a seed encoding name (case-insensitive).
    ///
    /// Aliases:
    /// - unpadded: "unpadded", "compact", "legacy"
    /// - zero-padded: "zero-padded", "zeropadded", "padded", "yyyymmdd"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', '_', ' '], "").as_str() {
            "unpadded" | "compact" | "legacy" => Ok(SeedEncoding::Unpadded),
            "zeropadded" | "padded" | "yyyymmdd" => Ok(SeedEncoding::ZeroPadded),
            _ => Err(SeedEncodingError::Unknown(s.to_string())),
        }
    }
}

impl fmt::Display for SeedEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::SeedEncoding;
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
    use std::str::FromStr;

    impl Serialize for SeedEncoding {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for SeedEncoding {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            SeedEncoding::from_str(&s).map_err(de::Error::custom)
        }
    }
}

/// Returns the daily seed for `date` using the unpadded encoding.
#[inline]
pub fn daily_seed(date: Date) -> i64 {
    SeedEncoding::Unpadded.encode(date)
}

/// Returns the daily seed for `date` using `encoding`.
#[inline]
pub fn daily_seed_with(date: Date, encoding: SeedEncoding) -> i64 {
    encoding.encode(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    /// Digit-string rendering of the unpadded encoding.
    fn concatenated(date: Date) -> i64 {
        format!("{}{}{}", date.year(), date.month(), date.day())
            .parse()
            .unwrap()
    }

    #[test]
    fn test_unpadded_known_values() {
        assert_eq!(daily_seed(date(2026, 3, 7)), 202637);
        assert_eq!(daily_seed(date(2026, 10, 18)), 20261018);
        assert_eq!(daily_seed(date(2026, 1, 13)), 2026113);
        assert_eq!(daily_seed(date(2026, 12, 1)), 2026121);
    }

    #[test]
    fn test_unpadded_collision_is_preserved() {
        assert_eq!(daily_seed(date(2026, 1, 13)), daily_seed(date(2026, 11, 3)));
    }

    #[test]
    fn test_zero_padded_known_values() {
        let enc = SeedEncoding::ZeroPadded;
        assert_eq!(daily_seed_with(date(2026, 3, 7), enc), 20260307);
        assert_eq!(daily_seed_with(date(2026, 10, 18), enc), 20261018);
        assert_ne!(
            daily_seed_with(date(2026, 1, 13), enc),
            daily_seed_with(date(2026, 11, 3), enc)
        );
    }

    #[test]
    fn test_short_and_negative_years() {
        assert_eq!(daily_seed(date(999, 1, 2)), 99912);
        assert_eq!(daily_seed(date(-5, 1, 1)), -511);
        assert_eq!(daily_seed_with(date(-5, 1, 1), SeedEncoding::ZeroPadded), -50101);
    }

    #[test]
    fn test_default_is_unpadded() {
        assert_eq!(SeedEncoding::default(), SeedEncoding::Unpadded);
    }

    #[test]
    fn test_encoding_from_str() {
        assert_eq!(
            "unpadded".parse::<SeedEncoding>().unwrap(),
            SeedEncoding::Unpadded
        );
        assert_eq!(
            "Zero-Padded".parse::<SeedEncoding>().unwrap(),
            SeedEncoding::ZeroPadded
        );
        assert_eq!(
            "zero_padded".parse::<SeedEncoding>().unwrap(),
            SeedEncoding::ZeroPadded
        );
        assert_eq!(
            "YYYYMMDD".parse::<SeedEncoding>().unwrap(),
            SeedEncoding::ZeroPadded
        );
        assert_eq!(
            "hex".parse::<SeedEncoding>(),
            Err(SeedEncodingError::Unknown("hex".to_string()))
        );
    }

    #[test]
    fn test_encoding_display_parses_back() {
        for enc in [SeedEncoding::Unpadded, SeedEncoding::ZeroPadded] {
            assert_eq!(enc.to_string().parse::<SeedEncoding>().unwrap(), enc);
        }
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_encoding_serde_roundtrip() {
            let json = serde_json::to_string(&SeedEncoding::ZeroPadded).unwrap();
            assert_eq!(json, "\"zero-padded\"");
            let parsed: SeedEncoding = serde_json::from_str("\"legacy\"").unwrap();
            assert_eq!(parsed, SeedEncoding::Unpadded);
        }
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_unpadded_matches_digit_concatenation(
                y in 1000i32..10_000,
                m in 1u32..=12,
                d in 1u32..=28,
            ) {
                let dt = date(y, m, d);
                prop_assert_eq!(daily_seed(dt), concatenated(dt));
            }

            #[test]
            fn test_zero_padded_matches_iso_digits(
                y in 1000i32..10_000,
                m in 1u32..=12,
                d in 1u32..=28,
            ) {
                let dt = date(y, m, d);
                let digits: i64 = dt.to_string().replace('-', "").parse().unwrap();
                prop_assert_eq!(daily_seed_with(dt, SeedEncoding::ZeroPadded), digits);
            }

            #[test]
            fn test_seed_is_deterministic(
                y in 1900i32..2200,
                m in 1u32..=12,
                d in 1u32..=28,
            ) {
                prop_assert_eq!(daily_seed(date(y, m, d)), daily_seed(date(y, m, d)));
            }
        }
    }
}
