// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Duration component designators.
//!
//! | Unit | Designator | Part |
//! |------|------------|------|
//! | [`Unit::Years`] | `Y` | date |
//! | [`Unit::Months`] | `M` | date |
//! | [`Unit::Weeks`] | `W` | date |
//! | [`Unit::Days`] | `D` | date |
//! | [`Unit::Hours`] | `H` | time |
//! | [`Unit::Minutes`] | `M` | time |
//! | [`Unit::Seconds`] | `S` | time |

use std::fmt;

/// One of the seven components of an [`IsoDuration`](crate::IsoDuration),
/// in the order they must appear in a duration literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Years,
    Months,
    Weeks,
    Days,
    Hours,
    Minutes,
    Seconds,
}

impl Unit {
    /// Date-part units, in literal order.
    pub const DATE: [Unit; 4] = [Unit::Years, Unit::Months, Unit::Weeks, Unit::Days];

    /// Time-part units (after the `T` separator), in literal order.
    pub const TIME: [Unit; 3] = [Unit::Hours, Unit::Minutes, Unit::Seconds];

    /// The letter that follows the number in a duration literal.
    ///
    /// Note that `M` is shared by months and minutes; the `T` separator
    /// tells them apart.
    #[inline]
    pub const fn designator(self) -> char {
        match self {
            Unit::Years => 'Y',
            Unit::Months => 'M',
            Unit::Weeks => 'W',
            Unit::Days => 'D',
            Unit::Hours => 'H',
            Unit::Minutes => 'M',
            Unit::Seconds => 'S',
        }
    }

    /// Whether this unit belongs to the time part of a literal.
    #[inline]
    pub const fn is_time(self) -> bool {
        matches!(self, Unit::Hours | Unit::Minutes | Unit::Seconds)
    }

    /// Lowercase plural name, e.g. `"months"`.
    pub const fn name(self) -> &'static str {
        match self {
            Unit::Years => "years",
            Unit::Months => "months",
            Unit::Weeks => "weeks",
            Unit::Days => "days",
            Unit::Hours => "hours",
            Unit::Minutes => "minutes",
            Unit::Seconds => "seconds",
        }
    }

    /// Looks up the unit for `designator` within one part of a literal.
    pub(crate) fn from_designator(designator: u8, time_part: bool) -> Option<Unit> {
        let units: &[Unit] = if time_part { &Unit::TIME } else { &Unit::DATE };
        units
            .iter()
            .copied()
            .find(|unit| unit.designator() as u8 == designator)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
