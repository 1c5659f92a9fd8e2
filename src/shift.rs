// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Applying a duration to a `chrono::DateTime`.
//!
//! A shift happens in two steps:
//!
//! 1. **Calendar step.** Years and months (`years * 12 + months`), then
//!    days (`weeks * 7 + days`), are added to the *local* calendar date.
//!    The wall-clock time of day is kept, even when the zone's UTC offset
//!    differs on the new date.
//! 2. **Linear step.** Hours, minutes and seconds are added as elapsed
//!    time, so the wall-clock hour may move across a DST transition.
//!
//! This makes `P1D` mean "same time tomorrow" and `PT24H` mean "exactly
//! 24 hours later", which differ on the days a zone changes its offset.
//!
//! Adding months to a day that does not exist in the target month clamps
//! to the last day of that month (`Jan 31 + P1M = Feb 28`), as chrono
//! does. Shifts from such days are therefore not always reversible.
//!
//! When the new local time is ambiguous (clocks fall back) the earlier
//! instant is chosen. When it falls in a gap (clocks spring forward) it is
//! read with the offset in effect before the gap, which lands after it:
//! `02:30` on a night that jumps from `02:00` to `03:00` becomes `03:30`.

use crate::IsoDuration;
use chrono::offset::MappedLocalTime;
use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime, Offset, TimeDelta, TimeZone};
use std::ops::{Add, Sub};

impl IsoDuration {
    /// Shift `point` forward by this duration.
    ///
    /// Returns `None` if the result is out of chrono's representable range.
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use isoduration::IsoDuration;
    ///
    /// let start = Utc.with_ymd_and_hms(2018, 1, 1, 0, 0, 0).unwrap();
    /// let d: IsoDuration = "P10Y5M8DT5H10M6S".parse().unwrap();
    /// assert_eq!(
    ///     d.checked_shift(start),
    ///     Some(Utc.with_ymd_and_hms(2028, 6, 9, 5, 10, 6).unwrap())
    /// );
    /// ```
    pub fn checked_shift<Tz: TimeZone>(&self, point: DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.apply(point, false)
    }

    /// Shift `point` backward by this duration.
    ///
    /// The result is always the same as shifting forward by
    /// [`negate()`](Self::negate).
    pub fn checked_unshift<Tz: TimeZone>(&self, point: DateTime<Tz>) -> Option<DateTime<Tz>> {
        self.apply(point, true)
    }

    /// Shift `point` forward by this duration.
    ///
    /// # Panics
    ///
    /// Panics if the result is out of chrono's representable range, which
    /// chrono caps at roughly 262,000 years either side of year 0. Ordinary
    /// parsed input such as `P1000000Y` is enough to get there, so use
    /// [`checked_shift`](Self::checked_shift) for durations that are not trusted.
    pub fn shift<Tz: TimeZone>(&self, point: DateTime<Tz>) -> DateTime<Tz> {
        self.checked_shift(point)
            .expect("`IsoDuration::shift` result out of range")
    }

    /// Shift `point` backward by this duration.
    ///
    /// # Panics
    ///
    /// Panics if the result is out of chrono's representable range, which
    /// chrono caps at roughly 262,000 years either side of year 0. Ordinary
    /// parsed input such as `P1000000Y` is enough to get there, so use
    /// [`checked_unshift`](Self::checked_unshift) for durations that are not trusted.
    pub fn unshift<Tz: TimeZone>(&self, point: DateTime<Tz>) -> DateTime<Tz> {
        self.checked_unshift(point)
            .expect("`IsoDuration::unshift` result out of range")
    }

    fn apply<Tz: TimeZone>(&self, point: DateTime<Tz>, backward: bool) -> Option<DateTime<Tz>> {
        let mut months = self.years.checked_mul(12)?.checked_add(self.months)?;
        let mut days = self.weeks.checked_mul(7)?.checked_add(self.days)?;
        let mut elapsed = self.checked_to_elapsed()?;
        if backward {
            months = months.checked_neg()?;
            days = days.checked_neg()?;
            elapsed = -elapsed;
        }

        let point = if months != 0 || days != 0 {
            add_calendar(point, months, days)?
        } else {
            point
        };
        point.checked_add_signed(elapsed)
    }
}

/// Calendar step: move the local date, keep the local time of day.
fn add_calendar<Tz: TimeZone>(point: DateTime<Tz>, months: i64, days: i64) -> Option<DateTime<Tz>> {
    let local = point.naive_local();
    let date = add_months(local.date(), months)?;
    let date = add_days(date, days)?;
    resolve_local(&point.timezone(), date.and_time(local.time()))
}

fn add_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months < 0 {
        date.checked_sub_months(magnitude)
    } else {
        date.checked_add_months(magnitude)
    }
}

fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let magnitude = Days::new(days.unsigned_abs());
    if days < 0 {
        date.checked_sub_days(magnitude)
    } else {
        date.checked_add_days(magnitude)
    }
}

/// Map a wall-clock time back into `tz`, earlier instant on a fold,
/// pre-transition offset in a gap.
fn resolve_local<Tz: TimeZone>(tz: &Tz, local: NaiveDateTime) -> Option<DateTime<Tz>> {
    match tz.from_local_datetime(&local) {
        MappedLocalTime::Single(resolved) => Some(resolved),
        MappedLocalTime::Ambiguous(earlier, _) => {
            trace!("local time {local} is ambiguous, using the earlier instant");
            Some(earlier)
        }
        MappedLocalTime::None => {
            // A day earlier is safely before the transition.
            let before = local.checked_sub_signed(TimeDelta::try_days(1)?)?;
            let offset = tz.offset_from_local_datetime(&before).earliest()?.fix();
            let utc = local
                .checked_sub_signed(TimeDelta::try_seconds(offset.local_minus_utc().into())?)?;
            trace!("local time {local} falls in a gap, resolving with offset {offset}");
            Some(tz.from_utc_datetime(&utc))
        }
    }
}

// ── Operators ─────────────────────────────────────────────────────────────

impl<Tz: TimeZone> Add<IsoDuration> for DateTime<Tz> {
    type Output = DateTime<Tz>;

    #[inline]
    fn add(self, rhs: IsoDuration) -> Self::Output {
        rhs.shift(self)
    }
}

impl<Tz: TimeZone> Sub<IsoDuration> for DateTime<Tz> {
    type Output = DateTime<Tz>;

    #[inline]
    fn sub(self, rhs: IsoDuration) -> Self::Output {
        rhs.unshift(self)
    }
}
