// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! The duration value type.
//!
//! [`IsoDuration`] holds the seven components of an ISO 8601 duration
//! exactly as written: nothing is normalized, so `PT90M` stays ninety
//! minutes and never becomes `PT1H30M`. All arithmetic and comparison is
//! component-wise, which is exact for the time part but only approximate
//! once years or months are involved, since those have no fixed length.

use qtty::Seconds;
use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ═══════════════════════════════════════════════════════════════════════════
// IsoDuration
// ═══════════════════════════════════════════════════════════════════════════

/// An ISO 8601 duration such as `P1Y2M3DT4H5M6.5S`.
///
/// The fields are public and may be set directly. A parsed literal always
/// carries one sign for all of its components, but values built by hand or
/// through arithmetic may mix signs freely.
///
/// # Examples
///
/// ```
/// use isoduration::IsoDuration;
///
/// let d: IsoDuration = "P1DT12H".parse().unwrap();
/// assert_eq!(d.days, 1);
/// assert_eq!(d.hours, 12);
/// assert_eq!(d.to_string(), "P1DT12H");
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct IsoDuration {
    pub years: i64,
    pub months: i64,
    pub weeks: i64,
    pub days: i64,
    // ── time part ──
    pub hours: i64,
    pub minutes: i64,
    /// Seconds, possibly fractional (e.g. `33.3444`).
    pub seconds: f64,
}

impl IsoDuration {
    /// The empty duration, written `P0D`.
    pub const ZERO: Self = Self::new(0, 0, 0, 0, 0, 0, 0.0);

    // ── constructors ──────────────────────────────────────────────────

    /// Create a duration from all seven components.
    #[inline]
    pub const fn new(
        years: i64,
        months: i64,
        weeks: i64,
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: f64,
    ) -> Self {
        Self {
            years,
            months,
            weeks,
            days,
            hours,
            minutes,
            seconds,
        }
    }

    // ── predicates ────────────────────────────────────────────────────

    /// `true` if every component is zero, i.e. this is `P0D`.
    #[inline]
    pub fn is_zero(&self) -> bool {
        !self.has_date_part() && !self.has_time_part()
    }

    /// `true` if *any* component is strictly negative.
    ///
    /// A mixed-sign value such as one day minus one hour counts as
    /// negative, and is formatted with a leading `-`.
    pub fn is_negative(&self) -> bool {
        self.years < 0
            || self.months < 0
            || self.weeks < 0
            || self.days < 0
            || self.hours < 0
            || self.minutes < 0
            || self.seconds < 0.0
    }

    /// `true` if any of years, months, weeks or days is non-zero.
    #[inline]
    pub fn has_date_part(&self) -> bool {
        self.years != 0 || self.months != 0 || self.weeks != 0 || self.days != 0
    }

    /// `true` if any of hours, minutes or seconds is non-zero.
    #[inline]
    pub fn has_time_part(&self) -> bool {
        self.hours != 0 || self.minutes != 0 || self.seconds != 0.0
    }

    // ── derived quantities ────────────────────────────────────────────

    /// Weeks and days folded into a single day count, `weeks * 7 + days`.
    ///
    /// Wraps on overflow like the arithmetic operators.
    #[inline]
    pub fn calendar_days(&self) -> i64 {
        self.weeks.wrapping_mul(7).wrapping_add(self.days)
    }

    /// Length of the time part as a linear quantity.
    ///
    /// Years, months, weeks and days are ignored.
    pub fn time_seconds(&self) -> Seconds {
        Seconds::new(self.hours as f64 * 3_600.0 + self.minutes as f64 * 60.0 + self.seconds)
    }

    /// Flip the sign of every component.
    ///
    /// An `i64::MIN` component has no positive counterpart and stays
    /// `i64::MIN`.
    #[inline]
    pub fn negate(&self) -> Self {
        Self {
            years: self.years.wrapping_neg(),
            months: self.months.wrapping_neg(),
            weeks: self.weeks.wrapping_neg(),
            days: self.days.wrapping_neg(),
            hours: self.hours.wrapping_neg(),
            minutes: self.minutes.wrapping_neg(),
            seconds: -self.seconds,
        }
    }

    // ── checked arithmetic ────────────────────────────────────────────

    /// Component-wise sum, or `None` if any integer component overflows.
    pub fn checked_add(&self, rhs: &Self) -> Option<Self> {
        Some(Self {
            years: self.years.checked_add(rhs.years)?,
            months: self.months.checked_add(rhs.months)?,
            weeks: self.weeks.checked_add(rhs.weeks)?,
            days: self.days.checked_add(rhs.days)?,
            hours: self.hours.checked_add(rhs.hours)?,
            minutes: self.minutes.checked_add(rhs.minutes)?,
            seconds: self.seconds + rhs.seconds,
        })
    }

    /// Component-wise difference, or `None` if any integer component
    /// overflows.
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        Some(Self {
            years: self.years.checked_sub(rhs.years)?,
            months: self.months.checked_sub(rhs.months)?,
            weeks: self.weeks.checked_sub(rhs.weeks)?,
            days: self.days.checked_sub(rhs.days)?,
            hours: self.hours.checked_sub(rhs.hours)?,
            minutes: self.minutes.checked_sub(rhs.minutes)?,
            seconds: self.seconds - rhs.seconds,
        })
    }

    /// Every component scaled by `n`, or `None` if any integer component
    /// overflows.
    pub fn checked_mul(&self, n: i64) -> Option<Self> {
        Some(Self {
            years: self.years.checked_mul(n)?,
            months: self.months.checked_mul(n)?,
            weeks: self.weeks.checked_mul(n)?,
            days: self.days.checked_mul(n)?,
            hours: self.hours.checked_mul(n)?,
            minutes: self.minutes.checked_mul(n)?,
            seconds: self.seconds * n as f64,
        })
    }

    #[inline]
    fn date_fields(&self) -> (i64, i64, i64, i64) {
        (self.years, self.months, self.weeks, self.days)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait implementations
// ═══════════════════════════════════════════════════════════════════════════

// ── Arithmetic ────────────────────────────────────────────────────────────
//
// Component-wise, with no carry between fields. Integer components wrap on
// overflow in every build profile; the `checked_*` methods report it.

/// Component-wise sum.
///
/// Integer components use two's-complement wrapping on overflow, so
/// `i64::MAX` years plus one year is `i64::MIN` years. Use
/// [`IsoDuration::checked_add`] to detect that instead.
impl Add for IsoDuration {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            years: self.years.wrapping_add(rhs.years),
            months: self.months.wrapping_add(rhs.months),
            weeks: self.weeks.wrapping_add(rhs.weeks),
            days: self.days.wrapping_add(rhs.days),
            hours: self.hours.wrapping_add(rhs.hours),
            minutes: self.minutes.wrapping_add(rhs.minutes),
            seconds: self.seconds + rhs.seconds,
        }
    }
}

impl AddAssign for IsoDuration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Component-wise difference, wrapping like [`Add`].
impl Sub for IsoDuration {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            years: self.years.wrapping_sub(rhs.years),
            months: self.months.wrapping_sub(rhs.months),
            weeks: self.weeks.wrapping_sub(rhs.weeks),
            days: self.days.wrapping_sub(rhs.days),
            hours: self.hours.wrapping_sub(rhs.hours),
            minutes: self.minutes.wrapping_sub(rhs.minutes),
            seconds: self.seconds - rhs.seconds,
        }
    }
}

impl SubAssign for IsoDuration {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

/// Scale every component by `n`, wrapping like [`Add`].
impl Mul<i64> for IsoDuration {
    type Output = Self;
    fn mul(self, n: i64) -> Self::Output {
        Self {
            years: self.years.wrapping_mul(n),
            months: self.months.wrapping_mul(n),
            weeks: self.weeks.wrapping_mul(n),
            days: self.days.wrapping_mul(n),
            hours: self.hours.wrapping_mul(n),
            minutes: self.minutes.wrapping_mul(n),
            seconds: self.seconds * n as f64,
        }
    }
}

impl Neg for IsoDuration {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self::Output {
        self.negate()
    }
}

// ── Ordering ──────────────────────────────────────────────────────────────

/// Date components are compared first (years, months, weeks, days), then
/// time components (hours, minutes, seconds); the first difference decides.
///
/// No conversion between units takes place, so the order is only
/// meaningful between values built from the same units: `P1M` sorts after
/// `P30D`, and `P1D` sorts after `PT48H`. A NaN seconds field makes values
/// unordered.
impl PartialOrd for IsoDuration {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.has_date_part() || other.has_date_part() {
            match self.date_fields().cmp(&other.date_fields()) {
                Ordering::Equal => {}
                ord => return Some(ord),
            }
        }
        match (self.hours, self.minutes).cmp(&(other.hours, other.minutes)) {
            Ordering::Equal => self.seconds.partial_cmp(&other.seconds),
            ord => Some(ord),
        }
    }
}

// ── Serde ─────────────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
impl Serialize for IsoDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for IsoDuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    fn days(d: i64) -> IsoDuration {
        IsoDuration {
            days: d,
            ..IsoDuration::ZERO
        }
    }

    fn hm(hours: i64, minutes: i64) -> IsoDuration {
        IsoDuration {
            hours,
            minutes,
            ..IsoDuration::ZERO
        }
    }

    #[test]
    fn test_zero_and_default_agree() {
        assert!(IsoDuration::ZERO.is_zero());
        assert_eq!(IsoDuration::default(), IsoDuration::ZERO);
        assert!(!days(1).is_zero());
        assert!(!IsoDuration {
            seconds: 0.5,
            ..IsoDuration::ZERO
        }
        .is_zero());
    }

    #[test]
    fn test_is_negative_on_any_component() {
        assert!(!days(1).is_negative());
        assert!(days(-1).is_negative());
        assert!(IsoDuration {
            days: 1,
            hours: -1,
            ..IsoDuration::ZERO
        }
        .is_negative());
        assert!(IsoDuration {
            seconds: -0.25,
            ..IsoDuration::ZERO
        }
        .is_negative());
        assert!(!IsoDuration::ZERO.is_negative());
    }

    #[test]
    fn test_negate_flips_every_component() {
        let d = IsoDuration::new(1, 2, 3, 4, 5, 6, 7.5);
        let n = d.negate();
        assert_eq!(n, IsoDuration::new(-1, -2, -3, -4, -5, -6, -7.5));
        assert_eq!(-d, n);
        assert_eq!(n.negate(), d);
    }

    #[test]
    fn test_add_is_component_wise() {
        assert_eq!(days(1) + days(2), days(3));
        let mut d = IsoDuration::new(1, 0, 0, 0, 0, 45, 30.5);
        d += IsoDuration::new(0, 11, 0, 0, 0, 45, 30.0);
        // no carry: 90 minutes and 60.5 seconds stay as written
        assert_eq!(d, IsoDuration::new(1, 11, 0, 0, 0, 90, 60.5));
    }

    #[test]
    fn test_subtract_does_not_borrow() {
        assert_eq!(hm(3, 45) - hm(2, 15), hm(1, 30));
        let mut d = hm(1, 0);
        d -= hm(0, 30);
        assert_eq!(d, hm(1, -30));
        assert!(d.is_negative());
    }

    #[test]
    fn test_multiply_scales_every_component() {
        assert_eq!(days(2) * -1, days(-2));
        let d = IsoDuration::new(1, 1, 1, 1, 1, 1, 1.5) * 3;
        assert_eq!(d, IsoDuration::new(3, 3, 3, 3, 3, 3, 4.5));
        assert!((d * 0).is_zero());
    }

    #[test]
    fn test_operators_wrap_on_overflow() {
        let max = IsoDuration {
            years: i64::MAX,
            ..IsoDuration::ZERO
        };
        let one = IsoDuration {
            years: 1,
            ..IsoDuration::ZERO
        };
        let min = IsoDuration {
            years: i64::MIN,
            ..IsoDuration::ZERO
        };
        assert_eq!((max + one).years, i64::MIN);
        assert_eq!((min - one).years, i64::MAX);
        assert_eq!((max * 2).years, -2);
        assert_eq!(min.negate().years, i64::MIN);
    }

    #[test]
    fn test_negate_of_min_stays_min() {
        let min = IsoDuration::new(i64::MIN, 0, 0, i64::MIN, 0, 1, -2.5);
        let negated = min.negate();
        assert_eq!(
            negated,
            IsoDuration::new(i64::MIN, 0, 0, i64::MIN, 0, -1, 2.5)
        );
        assert_eq!(-min, negated);
    }

    #[test]
    fn test_checked_arithmetic_reports_overflow() {
        let max = IsoDuration {
            years: i64::MAX,
            ..IsoDuration::ZERO
        };
        let one = IsoDuration {
            years: 1,
            ..IsoDuration::ZERO
        };
        assert_eq!(max.checked_add(&one), None);
        assert_eq!(max.negate().checked_sub(&(one * 2)), None);
        assert_eq!(max.checked_mul(2), None);

        let d = IsoDuration::new(1, 2, 3, 4, 5, 6, 7.5);
        assert_eq!(d.checked_add(&d), Some(d + d));
        assert_eq!(d.checked_sub(&d), Some(IsoDuration::ZERO));
        assert_eq!(d.checked_mul(-3), Some(d * -3));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = IsoDuration {
            seconds: 0.1 + 0.2,
            ..IsoDuration::ZERO
        };
        let b = IsoDuration {
            seconds: 0.3,
            ..IsoDuration::ZERO
        };
        assert_ne!(a, b);
        assert_ne!(hm(1, 30), hm(0, 90));
    }

    #[test]
    fn test_time_only_ordering() {
        assert!(hm(1, 30) < hm(2, 15));
        assert!(hm(2, 15) > hm(1, 30));
        assert!(hm(1, 30) <= hm(1, 30));
        let a = IsoDuration {
            seconds: 1.5,
            ..IsoDuration::ZERO
        };
        let b = IsoDuration {
            seconds: 2.0,
            ..IsoDuration::ZERO
        };
        assert!(a < b);
    }

    #[test]
    fn test_date_components_decide_first() {
        let a = IsoDuration {
            days: 1,
            hours: 23,
            ..IsoDuration::ZERO
        };
        let b = IsoDuration {
            days: 2,
            ..IsoDuration::ZERO
        };
        assert!(a < b);

        let month = IsoDuration {
            months: 1,
            ..IsoDuration::ZERO
        };
        assert!(days(30) < month);
        // units are not converted: one day sorts above 48 hours
        assert!(days(1) > hm(48, 0));
    }

    #[test]
    fn test_nan_seconds_are_unordered() {
        let nan = IsoDuration {
            seconds: f64::NAN,
            ..IsoDuration::ZERO
        };
        assert_eq!(nan.partial_cmp(&IsoDuration::ZERO), None);
        assert!(!(nan < IsoDuration::ZERO));
        assert!(!(nan > IsoDuration::ZERO));
    }

    #[test]
    fn test_calendar_days_folds_weeks() {
        let d = IsoDuration {
            weeks: 2,
            days: 3,
            ..IsoDuration::ZERO
        };
        assert_eq!(d.calendar_days(), 17);
        assert_eq!((-d).calendar_days(), -17);
    }

    #[test]
    fn test_time_seconds_ignores_date_part() {
        let d = IsoDuration::new(1, 2, 3, 4, 1, 2, 3.5);
        assert_eq!(d.time_seconds(), Seconds::new(3_723.5));
        assert_eq!(days(9).time_seconds(), Seconds::new(0.0));
    }
}
