use std::sync::mpsc::Receiver;

use stopwatch_core::{format_elapsed, LapRecord, StopwatchCore, TimerState};

use crate::pump::TickPump;

/// A stopwatch session: the pure timing core wired to a background tick
/// pump. The engine enables the pump on start and disables it on
/// pause/reset, so ticks only flow while running.
///
/// All mutation happens on the caller's thread. The host's event loop should
/// call [`Stopwatch::pump_ticks`] before reading time-derived state.
pub struct Stopwatch {
    core: StopwatchCore,
    pump: TickPump,
    ticks: Receiver<()>,
}

impl Stopwatch {
    pub fn new() -> Self {
        let (pump, ticks) = TickPump::new();
        Self {
            core: StopwatchCore::new(),
            pump,
            ticks,
        }
    }

    /// Start or resume. No-op while already running.
    pub fn start(&mut self) {
        if self.core.is_running() {
            return;
        }
        // Ticks left over from a prior enable period must not leak into
        // the new one
        self.drain_stale();
        self.core.start();
        self.pump.enable();
        log::debug!("stopwatch started at {} ms", self.core.elapsed_ms());
    }

    /// Pause. No-op while already paused; elapsed time and laps are kept.
    /// The pump is disabled before this returns.
    pub fn pause(&mut self) {
        if !self.core.is_running() {
            return;
        }
        // Ticks that arrived while still running count toward elapsed time
        self.pump_ticks();
        self.pump.disable();
        self.drain_stale();
        self.core.pause();
        log::debug!("stopwatch paused at {} ms", self.core.elapsed_ms());
    }

    /// Stop and zero everything. Valid in any state.
    pub fn reset(&mut self) {
        self.pump.disable();
        self.drain_stale();
        self.core.reset();
        log::debug!("stopwatch reset");
    }

    /// Record a lap at the current elapsed time. Silent no-op unless running
    /// with nonzero elapsed time.
    pub fn record_lap(&mut self) -> Option<LapRecord> {
        self.pump_ticks();
        let lap = self.core.record_lap().copied();
        if let Some(lap) = lap {
            log::debug!(
                "lap {} recorded: total {} ms, split {} ms",
                lap.number,
                lap.total_ms,
                lap.split_ms
            );
        }
        lap
    }

    /// Deliver pending ticks to the core, returning how many were drained.
    /// Ticks are never coalesced; each contributes exactly one quantum.
    pub fn pump_ticks(&mut self) -> usize {
        let mut drained = 0;
        while self.ticks.try_recv().is_ok() {
            self.core.tick();
            drained += 1;
        }
        drained
    }

    pub fn state(&self) -> TimerState {
        self.core.state
    }

    pub fn is_running(&self) -> bool {
        self.core.is_running()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.core.elapsed_ms()
    }

    /// Elapsed time rendered as "M:SS.cs".
    pub fn formatted(&self) -> String {
        format_elapsed(self.core.elapsed_ms())
    }

    /// Recorded laps, oldest first. A caller wanting most-recent-first
    /// display reverses on read.
    pub fn laps(&self) -> &[LapRecord] {
        self.core.laps()
    }

    pub fn lap_count(&self) -> usize {
        self.core.lap_count()
    }

    pub fn fastest_lap(&self) -> Option<&LapRecord> {
        self.core.fastest_lap()
    }

    pub fn slowest_lap(&self) -> Option<&LapRecord> {
        self.core.slowest_lap()
    }

    fn drain_stale(&mut self) {
        while self.ticks.try_recv().is_ok() {}
    }
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}
