// Copyright © 2025 Stephan Kunz

//! Library implements a stopwatch for measuring the duration of code execution.
//!
//! A [`Timer`] is started and ended explicitly or used as a scoped resource
//! via [`Timer::scoped`], which pairs the calls on every exit path.
//! Typically it is sufficient to include the prelude with
//! `use stopwatch::prelude::*;`

// region:    --- modules
/// Error handling
pub mod error;
/// Output sinks for the human readable lines
pub mod output;
/// Public interface of stopwatch
pub mod prelude;
/// The timer itself
mod timer;
/// Display units
mod unit;
/// Helper functions
pub mod utils;

// flatten
pub use timer::*;
pub use unit::*;
// endregion: --- modules
