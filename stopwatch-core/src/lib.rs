//! Pure timing and lap logic with no platform dependencies.
//! Testable on host without threads or clocks; a host crate supplies ticks.

/// Fixed quantum by which elapsed time advances on each tick, in milliseconds.
pub const TICK_MS: u64 = 10;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum TimerState {
    Stopped,
    Running,
}

/// One recorded lap checkpoint.
///
/// `total_ms` is the elapsed time at the moment the lap was recorded;
/// `split_ms` is the time since the previous lap (or since start for lap 1).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LapRecord {
    pub number: u32,
    pub total_ms: u64,
    pub split_ms: u64,
}

pub struct StopwatchCore {
    pub state: TimerState,
    elapsed_ms: u64,
    laps: Vec<LapRecord>,
}

impl StopwatchCore {
    pub fn new() -> Self {
        Self {
            state: TimerState::Stopped,
            elapsed_ms: 0,
            laps: Vec::new(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed_ms
    }

    /// Recorded laps, oldest first.
    pub fn laps(&self) -> &[LapRecord] {
        &self.laps
    }

    pub fn lap_count(&self) -> usize {
        self.laps.len()
    }

    pub fn last_lap(&self) -> Option<&LapRecord> {
        self.laps.last()
    }

    /// Begin or resume accumulation. No-op while already running; elapsed
    /// time and laps are untouched either way.
    pub fn start(&mut self) {
        if self.state == TimerState::Running {
            return;
        }
        self.state = TimerState::Running;
    }

    /// Freeze accumulation. No-op while already stopped.
    pub fn pause(&mut self) {
        if self.state != TimerState::Running {
            return;
        }
        self.state = TimerState::Stopped;
    }

    /// Stop and zero everything. Valid in any state.
    pub fn reset(&mut self) {
        self.state = TimerState::Stopped;
        self.elapsed_ms = 0;
        self.laps.clear();
    }

    /// Advance elapsed time by one quantum. Must be ignored while stopped:
    /// a tick can still be in flight when a pause lands.
    pub fn tick(&mut self) {
        if self.state != TimerState::Running {
            return;
        }
        self.elapsed_ms += TICK_MS;
    }

    /// Record a lap at the current elapsed time.
    ///
    /// Only records while running with nonzero elapsed time; otherwise a
    /// silent no-op returning `None` (a lap press while stopped is a
    /// non-event, not a fault).
    pub fn record_lap(&mut self) -> Option<&LapRecord> {
        if self.state != TimerState::Running || self.elapsed_ms == 0 {
            return None;
        }
        let previous_total = self.laps.last().map_or(0, |lap| lap.total_ms);
        self.laps.push(LapRecord {
            number: self.laps.len() as u32 + 1,
            total_ms: self.elapsed_ms,
            split_ms: self.elapsed_ms - previous_total,
        });
        self.laps.last()
    }

    /// Lap with the minimum split time, or `None` if no laps yet.
    /// Ties go to the earliest lap, so the comparison stays strict.
    pub fn fastest_lap(&self) -> Option<&LapRecord> {
        let mut best: Option<&LapRecord> = None;
        for lap in &self.laps {
            if best.map_or(true, |b| lap.split_ms < b.split_ms) {
                best = Some(lap);
            }
        }
        best
    }

    /// Lap with the maximum split time, or `None` if no laps yet.
    /// Ties go to the earliest lap.
    pub fn slowest_lap(&self) -> Option<&LapRecord> {
        let mut worst: Option<&LapRecord> = None;
        for lap in &self.laps {
            if worst.map_or(true, |w| lap.split_ms > w.split_ms) {
                worst = Some(lap);
            }
        }
        worst
    }
}

impl Default for StopwatchCore {
    fn default() -> Self {
        Self::new()
    }
}

/// Format milliseconds as "M:SS.cs" (centiseconds, no leading zero on minutes)
pub fn format_elapsed(ms: u64) -> String {
    let total_secs = ms / 1000;
    let m = total_secs / 60;
    let s = total_secs % 60;
    let cs = (ms % 1000) / 10;
    format!("{}:{:02}.{:02}", m, s, cs)
}
