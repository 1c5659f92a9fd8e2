// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Parse errors.

use crate::Unit;
use thiserror::Error;

/// Reasons a duration literal can be rejected.
///
/// Parsing is all-or-nothing: an error never comes with a partially
/// populated [`IsoDuration`](crate::IsoDuration).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The text does not conform to the duration grammar.
    #[error("invalid duration '{input}': unexpected input at byte {position}")]
    InvalidFormat {
        /// The rejected literal.
        input: String,
        /// Byte offset at which scanning stopped.
        position: usize,
    },

    /// A component is syntactically valid but does not fit its numeric type.
    #[error("invalid duration '{input}': {unit} value '{digits}' is out of range")]
    OutOfRange {
        /// The rejected literal.
        input: String,
        /// The component that overflowed.
        unit: Unit,
        /// The digits of the offending component.
        digits: String,
    },
}

impl ParseError {
    /// The literal that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            ParseError::InvalidFormat { input, .. } | ParseError::OutOfRange { input, .. } => input,
        }
    }
}
