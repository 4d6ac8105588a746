//! End-to-end session tests driving the real tick pump thread.
//!
//! Wall-clock assertions are kept loose: the pump sleeps 10 ms per tick, so
//! scheduler jitter changes how many ticks land in a window, never their
//! 10 ms granularity.

use std::thread;
use std::time::Duration;

use stopwatch::Stopwatch;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn elapsed_accumulates_only_while_running() {
    init_logging();
    let mut sw = Stopwatch::new();
    assert!(!sw.is_running());
    assert_eq!(sw.elapsed_ms(), 0);
    assert_eq!(sw.formatted(), "0:00.00");

    sw.start();
    assert!(sw.is_running());
    thread::sleep(Duration::from_millis(100));
    let drained = sw.pump_ticks();
    assert!(drained > 0);
    let elapsed = sw.elapsed_ms();
    assert!(elapsed >= 30, "expected some ticks to land, got {} ms", elapsed);
    assert_eq!(elapsed % 10, 0);

    sw.pause();
    let frozen = sw.elapsed_ms();
    thread::sleep(Duration::from_millis(60));
    assert_eq!(sw.pump_ticks(), 0);
    assert_eq!(sw.elapsed_ms(), frozen);

    // Resuming continues accumulation, it does not restart it
    sw.start();
    thread::sleep(Duration::from_millis(60));
    sw.pump_ticks();
    assert!(sw.elapsed_ms() > frozen);
}

#[test]
fn start_and_pause_are_idempotent() {
    init_logging();
    let mut sw = Stopwatch::new();
    sw.start();
    sw.start();
    thread::sleep(Duration::from_millis(50));
    sw.pump_ticks();
    let elapsed = sw.elapsed_ms();
    assert!(elapsed > 0);

    sw.pause();
    let frozen = sw.elapsed_ms();
    sw.pause();
    assert_eq!(sw.elapsed_ms(), frozen);
    assert!(!sw.is_running());
}

#[test]
fn laps_record_against_pumped_time() {
    init_logging();
    let mut sw = Stopwatch::new();

    // Precondition miss: not running
    assert!(sw.record_lap().is_none());

    sw.start();
    thread::sleep(Duration::from_millis(80));
    let lap1 = sw.record_lap().expect("running with elapsed time");
    assert_eq!(lap1.number, 1);
    assert_eq!(lap1.total_ms, lap1.split_ms);
    assert!(lap1.total_ms > 0);

    thread::sleep(Duration::from_millis(80));
    let lap2 = sw.record_lap().expect("second lap");
    assert_eq!(lap2.number, 2);
    assert_eq!(lap2.split_ms, lap2.total_ms - lap1.total_ms);

    let laps = sw.laps();
    assert_eq!(laps.len(), 2);
    let split_sum: u64 = laps.iter().map(|lap| lap.split_ms).sum();
    assert_eq!(split_sum, laps.last().unwrap().total_ms);

    // Precondition miss: paused
    sw.pause();
    assert!(sw.record_lap().is_none());
    assert_eq!(sw.lap_count(), 2);
}

#[test]
fn reset_clears_state_from_any_point() {
    init_logging();
    let mut sw = Stopwatch::new();
    sw.start();
    thread::sleep(Duration::from_millis(50));
    sw.record_lap();
    sw.reset();

    assert!(!sw.is_running());
    assert_eq!(sw.elapsed_ms(), 0);
    assert_eq!(sw.lap_count(), 0);
    assert!(sw.fastest_lap().is_none());
    assert!(sw.slowest_lap().is_none());

    // No stale ticks from before the reset may leak in
    thread::sleep(Duration::from_millis(30));
    assert_eq!(sw.pump_ticks(), 0);
    assert_eq!(sw.elapsed_ms(), 0);

    // Session is reusable
    sw.start();
    thread::sleep(Duration::from_millis(50));
    sw.pump_ticks();
    assert!(sw.elapsed_ms() > 0);
}
