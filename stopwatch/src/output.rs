// Copyright © 2025 Stephan Kunz

//! Module `output` provides the sink a [`Timer`](crate::Timer) writes its
//! human readable lines to.
//!
//! Keeping the sink behind a trait keeps the timer testable without
//! capturing the process output streams.

// region:		--- modules
use std::sync::{Arc, Mutex};
// endregion:	--- modules

// region:		--- OutputSink
/// Sink for the human readable lines emitted by a [`Timer`](crate::Timer).
pub trait OutputSink: Send + Sync {
	/// Write one formatted line.
	fn write_line(&mut self, line: &str);
}
// endregion:	--- OutputSink

// region:		--- ConsoleSink
/// The default sink, writing each line to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleSink;

impl OutputSink for ConsoleSink {
	fn write_line(&mut self, line: &str) {
		println!("{line}");
	}
}
// endregion:	--- ConsoleSink

// region:		--- MemorySink
/// A sink recording every line into shared memory.
///
/// The recorded lines stay accessible through [`Self::lines`] after the sink
/// has been handed to a timer.
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
	lines: Arc<Mutex<Vec<String>>>,
}

impl MemorySink {
	/// Creates an empty sink.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// A snapshot of the lines recorded so far.
	#[must_use]
	pub fn lines(&self) -> Vec<String> {
		self.lines
			.lock()
			.map(|lines| lines.clone())
			.unwrap_or_default()
	}
}

impl OutputSink for MemorySink {
	fn write_line(&mut self, line: &str) {
		if let Ok(mut lines) = self.lines.lock() {
			lines.push(line.into());
		}
	}
}
// endregion:	--- MemorySink
