// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! ISO 8601 durations
//!
//! This crate parses, formats and applies ISO 8601 duration literals such
//! as `P1Y2M3DT4H5M6.5S`.
//!
//! # Core types
//!
//! - [`IsoDuration`] — the seven components of a duration, kept as written.
//! - [`Unit`] — one of those components and its designator letter.
//! - [`ParseError`] — why a literal was rejected.
//!
//! # Operations
//!
//! | Operation | API |
//! |-----------|-----|
//! | parse | [`IsoDuration::parse`], [`str::parse`] |
//! | format | [`Display`](std::fmt::Display) (`to_string()`) |
//! | shift / unshift | [`IsoDuration::shift`], [`IsoDuration::unshift`], `DateTime + IsoDuration` |
//! | arithmetic | `+`, `-`, `* i64`, unary `-` (component-wise, no carry, wrapping), `checked_*` |
//! | comparison | `==`, `<`, `>` |
//! | elapsed time | [`IsoDuration::to_elapsed`], [`IsoDuration::from_elapsed`] |
//!
//! Shifting splits a duration into calendar units (years, months, weeks,
//! days), applied to the local date so that `P1D` keeps the wall-clock
//! time across DST changes, and linear units (hours, minutes, seconds),
//! added as elapsed time.
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use isoduration::IsoDuration;
//!
//! let d: IsoDuration = "P1MT12H".parse().unwrap();
//! let start = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
//! assert_eq!(d.shift(start), Utc.with_ymd_and_hms(2024, 2, 15, 12, 0, 0).unwrap());
//! assert_eq!(d.to_string(), "P1MT12H");
//! ```
//!
//! # Features
//!
//! - `serde` — (de)serialize [`IsoDuration`] as its canonical string.
//! - `logging` — emit `log` records when a shift lands on an ambiguous or
//!   skipped local time.

#[macro_use]
mod logging;

mod duration;
mod elapsed;
mod error;
mod format;
mod parse;
mod shift;
mod unit;

// ── Re-exports ────────────────────────────────────────────────────────────

pub use duration::IsoDuration;
pub use error::ParseError;
pub use unit::Unit;
