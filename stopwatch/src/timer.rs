// Copyright © 2025 Stephan Kunz

//! Module `timer` provides the [`Timer`] used to time duration of code
//! execution.
//!
//! A [`Timer`] is driven either manually via [`Timer::start`]/[`Timer::end`]
//! or as a scoped resource via [`Timer::scoped`], which returns a guard that
//! ends the measurement on every exit path.

// region:		--- modules
use core::fmt::Debug;
use core::ops::{Deref, DerefMut};
use std::time::{Duration, Instant};

use tracing::{error, instrument, Level};

use crate::error::{Error, Result};
use crate::output::{ConsoleSink, OutputSink};
use crate::unit::TimeUnit;
// endregion:	--- modules

// region:		--- Timer
/// A stopwatch measuring one span of elapsed wall-clock time at a time.
///
/// The most recent completed measurement is stored as a raw [`Duration`];
/// the configured [`TimeUnit`] converts it only at read time.
pub struct Timer {
	/// The timers name, used in the output lines
	name: String,
	/// The unit results are displayed in
	unit: TimeUnit,
	/// Set while a measurement is in progress
	start_time: Option<Instant>,
	/// The most recent completed measurement
	result_time: Option<Duration>,
	/// Sink for the human readable lines
	sink: Box<dyn OutputSink>,
}

impl Debug for Timer {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		f.debug_struct("Timer")
			.field("name", &self.name)
			.field("unit", &self.unit)
			.field("start_time", &self.start_time)
			.field("result_time", &self.result_time)
			.finish_non_exhaustive()
	}
}

impl Default for Timer {
	fn default() -> Self {
		Self::new("Timer", TimeUnit::default())
	}
}

impl Timer {
	/// Constructor for a [`Timer`] writing to stdout.
	///
	/// The unit is an enum, so no validation is necessary here; assignment
	/// by code goes through [`Self::set_unit`] instead.
	#[must_use]
	pub fn new(name: impl Into<String>, unit: TimeUnit) -> Self {
		Self {
			name: name.into(),
			unit,
			start_time: None,
			result_time: None,
			sink: Box::new(ConsoleSink),
		}
	}

	/// Replace the output sink.
	#[must_use]
	pub fn with_sink<S>(mut self, sink: S) -> Self
	where
		S: OutputSink + 'static,
	{
		self.sink = Box::new(sink);
		self
	}

	/// The timers name.
	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Set the timers name.
	pub fn set_name(&mut self, name: impl Into<String>) {
		self.name = name.into();
	}

	/// The unit results are displayed in.
	#[must_use]
	pub const fn unit(&self) -> TimeUnit {
		self.unit
	}

	/// Set the display unit by code.
	///
	/// The stored measurement stays raw, there is no recomputation.
	/// # Errors
	/// [`Error::InvalidUnit`] if the code is not one of `ms`, `s`, `m`, `h`;
	/// the previous unit stays in place.
	pub fn set_unit(&mut self, code: &str) -> Result<()> {
		self.unit = code.parse()?;
		Ok(())
	}

	/// Whether a measurement is currently in progress.
	#[must_use]
	pub const fn is_running(&self) -> bool {
		self.start_time.is_some()
	}

	/// The most recent completed measurement, if any.
	#[must_use]
	pub const fn last_duration(&self) -> Option<Duration> {
		self.result_time
	}

	/// Starts the timer.
	///
	/// With `display_start` set, a starting notice is written to the sink
	/// before the instant is recorded.
	/// # Errors
	/// [`Error::AlreadyRunning`] if a measurement is already in progress;
	/// the running measurement is unaffected.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn start(&mut self, display_start: bool) -> Result<()> {
		if self.start_time.is_some() {
			return Err(Error::AlreadyRunning);
		}
		if display_start {
			self.sink.write_line("Starting Timer...");
		}
		self.start_time = Some(Instant::now());
		Ok(())
	}

	/// Ends the timer and writes the result to the sink.
	///
	/// The line shows the timers name and the elapsed time converted into
	/// the current unit.
	/// # Errors
	/// [`Error::NotRunning`] if no measurement is in progress.
	#[instrument(level = Level::TRACE, skip_all)]
	pub fn end(&mut self) -> Result<()> {
		let start = self.start_time.take().ok_or(Error::NotRunning)?;
		let elapsed = start.elapsed();
		self.result_time = Some(elapsed);

		let name = &self.name;
		let value = self.unit.convert(elapsed.as_secs_f64());
		let unit_name = self.unit.display_name();
		self.sink.write_line(&format!("{name}: {value} {unit_name}"));
		Ok(())
	}

	/// Elapsed seconds since [`Self::start`], without stopping the timer.
	///
	/// Meant for polling mid-measurement, so always in seconds regardless of
	/// the configured unit.
	/// # Errors
	/// [`Error::NotRunning`] if no measurement is in progress.
	pub fn current_result(&self) -> Result<f64> {
		self.start_time
			.ok_or(Error::NotRunning)
			.map(|start| start.elapsed().as_secs_f64())
	}

	/// A formatted line describing the most recent completed measurement,
	/// converted into the current unit.
	/// # Errors
	/// [`Error::NoResult`] if no measurement has ever completed.
	pub fn last_result(&self) -> Result<String> {
		let result = self.result_time.ok_or(Error::NoResult)?;

		let name = &self.name;
		let value = self.unit.convert(result.as_secs_f64());
		let unit_name = self.unit.display_name();
		Ok(format!("Most recent result for {name}: {value} {unit_name}"))
	}

	/// Starts the timer and returns a guard that ends it when dropped.
	///
	/// The guard derefs to the timer, so the measurement can be polled with
	/// [`Self::current_result`] inside the scope. The drop runs on every
	/// exit path, including unwinding.
	/// # Errors
	/// [`Error::AlreadyRunning`] if a measurement is already in progress.
	pub fn scoped(&mut self) -> Result<ScopedTimer<'_>> {
		self.start(false)?;
		Ok(ScopedTimer { timer: self })
	}
}
// endregion:	--- Timer

// region:		--- ScopedTimer
/// Guard pairing [`Timer::start`] with [`Timer::end`] over a scope.
#[must_use = "the measurement ends when the guard is dropped"]
pub struct ScopedTimer<'a> {
	timer: &'a mut Timer,
}

impl Deref for ScopedTimer<'_> {
	type Target = Timer;

	fn deref(&self) -> &Self::Target {
		self.timer
	}
}

impl DerefMut for ScopedTimer<'_> {
	fn deref_mut(&mut self) -> &mut Self::Target {
		self.timer
	}
}

impl Drop for ScopedTimer<'_> {
	fn drop(&mut self) {
		// ending through the guard by hand is allowed
		if self.timer.is_running() {
			if let Err(error) = self.timer.end() {
				error!("scoped timer end failed with {error}");
			}
		}
	}
}
// endregion:	--- ScopedTimer

#[cfg(test)]
mod tests {
	use std::thread::sleep;

	use crate::output::MemorySink;

	use super::*;

	// check, that the auto traits are available
	const fn is_normal<T: Sized + Send + Sync>() {}

	#[test]
	const fn normal_types() {
		is_normal::<Timer>();
	}

	fn recording_timer(name: &str, unit: TimeUnit) -> (Timer, MemorySink) {
		let sink = MemorySink::new();
		let timer = Timer::new(name, unit).with_sink(sink.clone());
		(timer, sink)
	}

	#[test]
	fn start_end_cycle() {
		let (mut timer, sink) = recording_timer("Test Timer", TimeUnit::Seconds);
		assert!(!timer.is_running());
		timer.start(false).expect("start failed");
		assert!(timer.is_running());
		sleep(Duration::from_millis(20));
		timer.end().expect("end failed");
		assert!(!timer.is_running());

		let duration = timer.last_duration().expect("no result stored");
		assert!(duration >= Duration::from_millis(20));

		let lines = sink.lines();
		assert_eq!(lines.len(), 1);
		assert!(lines[0].starts_with("Test Timer: "));
		assert!(lines[0].ends_with(" seconds"));
	}

	#[test]
	fn repeated_runs_overwrite_result() {
		let (mut timer, _sink) = recording_timer("T", TimeUnit::Seconds);
		timer.start(false).expect("start failed");
		sleep(Duration::from_millis(30));
		timer.end().expect("end failed");
		let first = timer.last_duration().expect("no result stored");

		timer.start(false).expect("restart failed");
		timer.end().expect("end failed");
		let second = timer.last_duration().expect("no result stored");
		assert!(second < first);
	}

	#[test]
	fn display_start_notice() {
		let (mut timer, sink) = recording_timer("T", TimeUnit::Seconds);
		timer.start(true).expect("start failed");
		assert_eq!(sink.lines(), vec!["Starting Timer...".to_owned()]);
	}

	#[test]
	fn double_start_fails() {
		let (mut timer, _sink) = recording_timer("T", TimeUnit::Seconds);
		timer.start(false).expect("start failed");
		sleep(Duration::from_millis(10));
		assert!(matches!(timer.start(false), Err(Error::AlreadyRunning)));
		// the first measurement is still in progress and spans from the
		// original start
		assert!(timer.is_running());
		let elapsed = timer.current_result().expect("not running");
		assert!(elapsed >= 0.01);
	}

	#[test]
	fn end_without_start_fails() {
		let (mut timer, sink) = recording_timer("T", TimeUnit::Seconds);
		assert!(matches!(timer.end(), Err(Error::NotRunning)));
		assert!(timer.last_duration().is_none());
		assert!(sink.lines().is_empty());
	}

	#[test]
	fn current_result_polling() {
		let (mut timer, _sink) = recording_timer("T", TimeUnit::Seconds);
		assert!(matches!(timer.current_result(), Err(Error::NotRunning)));

		timer.start(false).expect("start failed");
		let mut previous = 0.0;
		for _ in 0..5 {
			let current = timer.current_result().expect("not running");
			assert!(current >= previous);
			previous = current;
			sleep(Duration::from_millis(5));
		}
		timer.end().expect("end failed");
	}

	#[test]
	fn last_result_before_any_run_fails() {
		let (timer, _sink) = recording_timer("T", TimeUnit::Seconds);
		assert!(matches!(timer.last_result(), Err(Error::NoResult)));
	}

	#[test]
	fn invalid_unit_keeps_previous() {
		let (mut timer, _sink) = recording_timer("T", TimeUnit::Minutes);
		assert!(matches!(
			timer.set_unit("x"),
			Err(Error::InvalidUnit(code)) if code == "x"
		));
		assert_eq!(timer.unit(), TimeUnit::Minutes);
		timer.set_unit("h").expect("valid unit rejected");
		assert_eq!(timer.unit(), TimeUnit::Hours);
	}

	#[test]
	fn unit_conversion_round_trip() {
		let (mut timer, _sink) = recording_timer("T", TimeUnit::Seconds);
		timer.start(false).expect("start failed");
		sleep(Duration::from_millis(25));
		timer.end().expect("end failed");

		let seconds = timer
			.last_duration()
			.expect("no result stored")
			.as_secs_f64();
		timer.set_unit("ms").expect("valid unit rejected");
		let line = timer.last_result().expect("no result");
		assert!(line.starts_with("Most recent result for T: "));
		assert!(line.ends_with(" milliseconds"));

		let value: f64 = line
			.trim_start_matches("Most recent result for T: ")
			.trim_end_matches(" milliseconds")
			.parse()
			.expect("value not parseable");
		assert!((value - seconds * 1000.0).abs() < 1e-9);
	}

	#[test]
	fn scoped_ends_on_exit() {
		let (mut timer, sink) = recording_timer("Scoped", TimeUnit::Seconds);
		{
			let guard = timer.scoped().expect("start failed");
			sleep(Duration::from_millis(10));
			assert!(guard.current_result().expect("not running") > 0.0);
		}
		assert!(!timer.is_running());
		assert!(timer.last_duration().is_some());
		assert_eq!(sink.lines().len(), 1);
	}

	#[test]
	fn scoped_ends_on_unwind() {
		let (mut timer, sink) = recording_timer("Unwind", TimeUnit::Seconds);
		let caught = std::panic::catch_unwind(core::panic::AssertUnwindSafe(|| {
			let _guard = timer.scoped().expect("start failed");
			panic!("unwinding out of the scope");
		}));
		assert!(caught.is_err());
		assert!(!timer.is_running());
		assert!(timer.last_duration().is_some());
		assert_eq!(sink.lines().len(), 1);
	}

	#[test]
	fn scoped_allows_manual_end() {
		let (mut timer, sink) = recording_timer("Manual", TimeUnit::Seconds);
		{
			let mut guard = timer.scoped().expect("start failed");
			guard.end().expect("end failed");
		}
		// the guard must not end a second time
		assert_eq!(sink.lines().len(), 1);
	}

	#[test]
	fn defaults() {
		let timer = Timer::default();
		assert_eq!(timer.name(), "Timer");
		assert_eq!(timer.unit(), TimeUnit::Seconds);
		assert!(!timer.is_running());
		assert!(timer.last_duration().is_none());
	}
}
