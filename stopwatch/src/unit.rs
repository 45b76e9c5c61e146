// Copyright © 2025 Stephan Kunz

//! Module `unit` provides the fixed set of display units a
//! [`Timer`](crate::Timer) can report in.
//!
//! The unit table serves three purposes: validating unit changes, naming the
//! unit in output, and doing the conversion math. Durations are always stored
//! in raw elapsed time; a unit converts only at read time.

// region:		--- modules
use core::fmt::Display;
use core::str::FromStr;

use crate::error::Error;
// endregion:	--- modules

// region:		--- TimeUnit
/// The display units supported by a [`Timer`](crate::Timer).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum TimeUnit {
	/// `ms`, 0.001 seconds per unit
	Milliseconds,
	/// `s`, the default
	#[default]
	Seconds,
	/// `m`, 60 seconds per unit
	Minutes,
	/// `h`, 3600 seconds per unit
	Hours,
}

/// All units a [`Timer`](crate::Timer) accepts.
pub const ALLOWED_UNITS: [TimeUnit; 4] = [
	TimeUnit::Milliseconds,
	TimeUnit::Seconds,
	TimeUnit::Minutes,
	TimeUnit::Hours,
];

impl TimeUnit {
	/// The short code used for unit assignment.
	#[must_use]
	pub const fn code(self) -> &'static str {
		match self {
			Self::Milliseconds => "ms",
			Self::Seconds => "s",
			Self::Minutes => "m",
			Self::Hours => "h",
		}
	}

	/// The name used in the human readable output lines.
	#[must_use]
	pub const fn display_name(self) -> &'static str {
		match self {
			Self::Milliseconds => "milliseconds",
			Self::Seconds => "seconds",
			Self::Minutes => "minutes",
			Self::Hours => "hours",
		}
	}

	/// Conversion factor in seconds per unit.
	#[must_use]
	pub const fn seconds_per_unit(self) -> f64 {
		match self {
			Self::Milliseconds => 0.001,
			Self::Seconds => 1.0,
			Self::Minutes => 60.0,
			Self::Hours => 3600.0,
		}
	}

	/// Convert a raw duration in seconds into this unit.
	#[must_use]
	pub fn convert(self, seconds: f64) -> f64 {
		seconds / self.seconds_per_unit()
	}

	/// Checks whether a given unit code is valid.
	#[must_use]
	pub fn is_valid(code: &str) -> bool {
		Self::from_str(code).is_ok()
	}
}

impl Display for TimeUnit {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.write_str(self.code())
	}
}

impl FromStr for TimeUnit {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ms" => Ok(Self::Milliseconds),
			"s" => Ok(Self::Seconds),
			"m" => Ok(Self::Minutes),
			"h" => Ok(Self::Hours),
			_ => Err(Error::InvalidUnit(s.into())),
		}
	}
}
// endregion:	--- TimeUnit
