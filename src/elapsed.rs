// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Conversion to and from [`chrono::TimeDelta`].
//!
//! Only the time part survives: a `TimeDelta` is a fixed span of elapsed
//! time, while years, months, weeks and days have no fixed length.

use crate::IsoDuration;
use chrono::TimeDelta;

const NANOS_PER_SECOND: f64 = 1e9;
const SECONDS_PER_HOUR: i64 = 3_600;
const SECONDS_PER_MINUTE: i64 = 60;

impl IsoDuration {
    /// The time part as elapsed time, `hours + minutes + seconds`.
    ///
    /// Fractional seconds are rounded to the nearest nanosecond. Returns
    /// `None` if the sum does not fit in a `TimeDelta` or if the seconds
    /// field is not finite.
    pub fn checked_to_elapsed(&self) -> Option<TimeDelta> {
        let hours = TimeDelta::try_hours(self.hours)?;
        let minutes = TimeDelta::try_minutes(self.minutes)?;
        hours
            .checked_add(&minutes)?
            .checked_add(&seconds_delta(self.seconds)?)
    }

    /// Like [`checked_to_elapsed`](Self::checked_to_elapsed), saturating at
    /// [`TimeDelta::MIN`] / [`TimeDelta::MAX`] instead of failing.
    ///
    /// A NaN seconds field yields a zero `TimeDelta`.
    ///
    /// ```
    /// use isoduration::IsoDuration;
    ///
    /// let d: IsoDuration = "P2DT1H30M".parse().unwrap();
    /// assert_eq!(d.to_elapsed().num_minutes(), 90);
    /// ```
    pub fn to_elapsed(&self) -> TimeDelta {
        if let Some(elapsed) = self.checked_to_elapsed() {
            return elapsed;
        }
        let total = self.time_seconds().value();
        if total < 0.0 {
            TimeDelta::MIN
        } else if total > 0.0 {
            TimeDelta::MAX
        } else {
            TimeDelta::zero()
        }
    }

    /// Split elapsed time into whole hours, whole minutes and the remaining
    /// (possibly fractional) seconds. Date components are zero.
    ///
    /// Every component carries the sign of `elapsed`.
    pub fn from_elapsed(elapsed: TimeDelta) -> Self {
        let whole_seconds = elapsed.num_seconds();
        let hours = whole_seconds / SECONDS_PER_HOUR;
        let minutes = whole_seconds % SECONDS_PER_HOUR / SECONDS_PER_MINUTE;
        let seconds = (whole_seconds % SECONDS_PER_MINUTE) as f64
            + f64::from(elapsed.subsec_nanos()) / NANOS_PER_SECOND;
        Self {
            hours,
            minutes,
            seconds,
            ..Self::ZERO
        }
    }
}

impl From<TimeDelta> for IsoDuration {
    #[inline]
    fn from(elapsed: TimeDelta) -> Self {
        Self::from_elapsed(elapsed)
    }
}

fn seconds_delta(seconds: f64) -> Option<TimeDelta> {
    if !seconds.is_finite() {
        return None;
    }
    let whole = seconds.trunc();
    let nanos = ((seconds - whole) * NANOS_PER_SECOND).round() as i64;
    // `as` saturates; try_seconds rejects anything past TimeDelta's range
    TimeDelta::try_seconds(whole as i64)?.checked_add(&TimeDelta::nanoseconds(nanos))
}
