//! Stopwatch engine with centisecond resolution and lap tracking.
//!
//! Timing and lap-ledger logic lives in the pure `stopwatch-core` crate;
//! this crate adds the host pieces: a [`TickPump`] thread that emits one
//! notification per 10 ms quantum while enabled, and the [`Stopwatch`]
//! session that binds core and pump together. Presentation (rendering,
//! input handling) is the caller's concern.

mod pump;
mod stopwatch;

pub use crate::pump::TickPump;
pub use crate::stopwatch::Stopwatch;
pub use stopwatch_core::{format_elapsed, LapRecord, StopwatchCore, TimerState, TICK_MS};
