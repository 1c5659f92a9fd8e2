// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Canonical text form.
//!
//! Zero components are left out, a single leading `-` stands for the sign
//! of the whole value, and the zero duration is always written `P0D`.
//! Seconds use the shortest decimal form that reads back to the same
//! `f64`, without trailing zeros and without exponent notation.

use crate::{IsoDuration, Unit};
use std::fmt::{self, Write};

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("P0D");
        }

        if self.is_negative() {
            f.write_char('-')?;
        }
        f.write_char('P')?;
        write_component(f, self.years, Unit::Years)?;
        write_component(f, self.months, Unit::Months)?;
        write_component(f, self.weeks, Unit::Weeks)?;
        write_component(f, self.days, Unit::Days)?;

        if self.has_time_part() {
            f.write_char('T')?;
            write_component(f, self.hours, Unit::Hours)?;
            write_component(f, self.minutes, Unit::Minutes)?;
            if self.seconds != 0.0 {
                // f64's Display is already the shortest round-trip form,
                // and prints integral values without a fraction.
                write!(f, "{}", self.seconds.abs())?;
                f.write_char(Unit::Seconds.designator())?;
            }
        }
        Ok(())
    }
}

#[inline]
fn write_component(f: &mut fmt::Formatter<'_>, value: i64, unit: Unit) -> fmt::Result {
    if value == 0 {
        return Ok(());
    }
    write!(f, "{}{}", value.unsigned_abs(), unit.designator())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(s: &str) -> String {
        IsoDuration::parse(s).expect("parse").to_string()
    }

    #[test]
    fn test_zero_value_is_p0d() {
        assert_eq!(IsoDuration::ZERO.to_string(), "P0D");
        assert_eq!(IsoDuration::default().to_string(), "P0D");
        assert_eq!(roundtrip("P"), "P0D");
        assert_eq!(roundtrip("-PT0S"), "P0D");
    }

    #[test]
    fn test_single_units_roundtrip() {
        for s in [
            "P1Y",
            "P2M",
            "P3W",
            "P4D",
            "PT5H",
            "PT6M",
            "PT7S",
            "P1Y2M3W4DT5H6M7S",
        ] {
            assert_eq!(roundtrip(s), s);
        }
    }

    #[test]
    fn test_fractional_seconds() {
        let cases = [
            ("PT33.3444S", "PT33.3444S"),
            ("PT0.5S", "PT0.5S"),
            ("PT1.123S", "PT1.123S"),
            ("P343DT13H8M33.3444S", "P343DT13H8M33.3444S"),
            ("PT1.999999S", "PT1.999999S"),
            ("PT33.0S", "PT33S"),
            ("PT1.0S", "PT1S"),
            ("PT0.000001S", "PT0.000001S"),
        ];
        for (from, want) in cases {
            assert_eq!(roundtrip(from), want, "formatting {from}");
        }
    }

    #[test]
    fn test_negative_durations() {
        for s in [
            "-P1D",
            "-PT1H",
            "-PT1M",
            "-PT1S",
            "-PT33.3444S",
            "-P1Y2M3DT4H5M6S",
        ] {
            assert_eq!(roundtrip(s), s);
        }
    }

    #[test]
    fn test_time_separator_only_with_time_part() {
        assert_eq!(roundtrip("P1DT"), "P1D");
        assert_eq!(roundtrip("P1DT0H0M0S"), "P1D");
        assert_eq!(roundtrip("PT0H30M"), "PT30M");
    }

    #[test]
    fn test_mixed_signs_use_one_leading_minus() {
        let d = IsoDuration {
            days: 1,
            hours: -1,
            ..IsoDuration::ZERO
        };
        assert_eq!(d.to_string(), "-P1DT1H");
    }

    #[test]
    fn test_unnormalized_components_are_kept() {
        let d = IsoDuration {
            minutes: 90,
            seconds: 75.5,
            ..IsoDuration::ZERO
        };
        assert_eq!(d.to_string(), "PT90M75.5S");
    }

    #[test]
    fn test_extreme_values_do_not_overflow() {
        let d = IsoDuration {
            years: i64::MIN,
            ..IsoDuration::ZERO
        };
        assert_eq!(d.to_string(), "-P9223372036854775808Y");

        let big = IsoDuration {
            seconds: 1e21,
            ..IsoDuration::ZERO
        };
        assert_eq!(big.to_string(), "PT1000000000000000000000S");
    }

    #[test]
    fn test_format_parse_format_is_stable() {
        let d = IsoDuration::new(3, 0, 2, 11, 0, 59, 0.125);
        let text = d.to_string();
        assert_eq!(text, "P3Y2W11DT59M0.125S");
        assert_eq!(IsoDuration::parse(&text).unwrap(), d);
    }
}
