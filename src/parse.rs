// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Duration literal parser.
//!
//! Accepted grammar (case-sensitive, no whitespace anywhere):
//!
//! ```text
//! duration  = ["-"] "P" [n "Y"] [n "M"] [n "W"] [n "D"] ["T" [n "H"] [n "M"] [n ["." n] "S"]]
//! n         = one or more ASCII digits
//! ```
//!
//! Every component is optional but they must appear in the order above.
//! A leading `-` applies to all components. Only seconds may carry a
//! fraction. `P`, `-P` and `PT` are accepted and yield the zero duration.

use crate::{IsoDuration, ParseError, Unit};
use std::str::FromStr;

impl IsoDuration {
    /// Parse a duration literal such as `P1Y2M3DT4H5M6.5S` or `-PT90M`.
    ///
    /// # Errors
    ///
    /// [`ParseError::InvalidFormat`] if the text does not follow the
    /// grammar, [`ParseError::OutOfRange`] if a component overflows its
    /// numeric type.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        Scanner::new(text).duration()
    }
}

impl FromStr for IsoDuration {
    type Err = ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Single left-to-right pass over the literal's bytes.
struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn duration(mut self) -> Result<IsoDuration, ParseError> {
        let negative = self.eat(b'-');
        if !self.eat(b'P') {
            return Err(self.invalid_at(self.pos));
        }

        let mut duration = IsoDuration::ZERO;
        let mut in_time_part = false;
        let mut previous: Option<Unit> = None;

        while let Some(byte) = self.peek() {
            if byte == b'T' && !in_time_part {
                in_time_part = true;
                self.pos += 1;
                continue;
            }

            let start = self.pos;
            if self.digits() == 0 {
                return Err(self.invalid_at(self.pos));
            }
            let dot = self.pos;
            let fractional = self.eat(b'.');
            if fractional && self.digits() == 0 {
                return Err(self.invalid_at(self.pos));
            }
            let number = &self.input[start..self.pos];

            let unit = self
                .peek()
                .and_then(|designator| Unit::from_designator(designator, in_time_part))
                .ok_or_else(|| self.invalid_at(self.pos))?;
            if previous.is_some_and(|prev| prev >= unit) {
                return Err(self.invalid_at(self.pos));
            }
            if fractional && unit != Unit::Seconds {
                return Err(self.invalid_at(dot));
            }
            self.pos += 1;

            self.assign(&mut duration, unit, number, negative)?;
            previous = Some(unit);
        }

        Ok(duration)
    }

    fn assign(
        &self,
        duration: &mut IsoDuration,
        unit: Unit,
        number: &str,
        negative: bool,
    ) -> Result<(), ParseError> {
        let slot = match unit {
            Unit::Years => &mut duration.years,
            Unit::Months => &mut duration.months,
            Unit::Weeks => &mut duration.weeks,
            Unit::Days => &mut duration.days,
            Unit::Hours => &mut duration.hours,
            Unit::Minutes => &mut duration.minutes,
            Unit::Seconds => {
                let value = number
                    .parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| self.out_of_range(unit, number))?;
                duration.seconds = if negative { -value } else { value };
                return Ok(());
            }
        };
        let value = number
            .parse::<i64>()
            .map_err(|_| self.out_of_range(unit, number))?;
        *slot = if negative { -value } else { value };
        Ok(())
    }

    #[inline]
    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume a run of ASCII digits, returning how many were consumed.
    fn digits(&mut self) -> usize {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos - start
    }

    fn invalid_at(&self, position: usize) -> ParseError {
        ParseError::InvalidFormat {
            input: self.input.to_string(),
            position,
        }
    }

    fn out_of_range(&self, unit: Unit, digits: &str) -> ParseError {
        ParseError::OutOfRange {
            input: self.input.to_string(),
            unit,
            digits: digits.to_string(),
        }
    }
}
