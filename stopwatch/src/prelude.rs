// Copyright © 2025 Stephan Kunz

//! Most commonly used interface of `stopwatch`.
//! Typically it is sufficient to include the prelude with
//! `use stopwatch::prelude::*;`

// region:    --- modules
pub use crate::error::{Error, Result};
pub use crate::output::{ConsoleSink, MemorySink, OutputSink};
pub use crate::timer::{ScopedTimer, Timer};
pub use crate::unit::{TimeUnit, ALLOWED_UNITS};
// endregion: --- modules
