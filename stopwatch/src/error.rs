// Copyright © 2025 Stephan Kunz

//! `stopwatch` errors
//!
//! Every variant is a synchronous precondition violation raised at the
//! offending call; none is transient, so none is ever retried or caught
//! internally. A failing operation leaves the [`Timer`](crate::Timer)
//! unchanged.

use thiserror::Error;

// region:		--- types
/// Type alias for `std::result::Result` to ease up implementation
pub type Result<T> = core::result::Result<T, Error>;
// endregion:	--- types

// region:		--- Error
/// `stopwatch` error type.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
	/// `start` was called on an already running timer
	#[error("timer is already running")]
	AlreadyRunning,
	/// `end` or `current_result` was called on a stopped timer
	#[error("timer is not currently running")]
	NotRunning,
	/// `last_result` was called before any measurement completed
	#[error("the timer has not been run yet, nothing to return")]
	NoResult,
	/// a unit assignment used an unrecognized code
	#[error("invalid unit '{0}', allowed units: [ms, s, m, h]")]
	InvalidUnit(String),
}
// endregion:	--- Error
