//! `stopwatch` polling demonstration
//! Copyright © 2025 Stephan Kunz
//!
//! Measures a five second wait with a scoped [`Timer`], polling the running
//! measurement once per loop, then reports the result in milliseconds.

// region:		--- modules
use std::thread::sleep;
use std::time::Duration;

use stopwatch::prelude::*;
// endregion:	--- modules

fn main() -> Result<()> {
	stopwatch::utils::init_tracing();

	println!();
	println!("** Demonstrating the Timer summary line:");

	let mut timer = Timer::new("Test Timer", TimeUnit::Seconds);
	{
		let guard = timer.scoped()?;
		let mut current_second = 0;
		while guard.current_result()? < 5.0 {
			#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
			let whole_seconds = guard.current_result()?.floor() as u64;
			if whole_seconds != current_second {
				println!("{whole_seconds} second(s) elapsed.");
				current_second = whole_seconds;
			}
			sleep(Duration::from_millis(10));
		}
		// guard drop ends the timer and prints the summary line
	}

	println!();
	println!("** Changing Timer unit and printing last result:");
	timer.set_unit("ms")?;
	println!("{}", timer.last_result()?);

	Ok(())
}
