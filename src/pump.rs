use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use stopwatch_core::TICK_MS;

enum PumpOp {
    Start,
    Stop,
    Quit,
}

/// Background tick source: emits one notification per quantum while enabled,
/// nothing while disabled.
///
/// The thread owns no engine state. At most one tick can still be in flight
/// at the instant `disable` returns (the thread may be mid-sleep); the
/// engine's tick guard drops it.
pub struct TickPump {
    ctrl: Sender<PumpOp>,
    running: bool,
    handle: Option<JoinHandle<()>>,
}

impl TickPump {
    /// Spawn the pump thread, initially disabled. Returns the pump handle and
    /// the receiver on which ticks arrive.
    pub fn new() -> (Self, Receiver<()>) {
        let (ctrl_tx, ctrl_rx) = mpsc::channel();
        let (tick_tx, tick_rx) = mpsc::channel();
        let handle = thread::spawn(move || pump_thread(ctrl_rx, tick_tx));
        (
            Self {
                ctrl: ctrl_tx,
                running: false,
                handle: Some(handle),
            },
            tick_rx,
        )
    }

    /// Begin periodic notification. Idempotent; a second enable never stacks
    /// another notification stream.
    pub fn enable(&mut self) {
        if !self.running {
            self.running = true;
            log::debug!("tick pump enabled");
            self.ctrl.send(PumpOp::Start).ok();
        }
    }

    /// Stop notification. Idempotent.
    pub fn disable(&mut self) {
        if self.running {
            self.running = false;
            log::debug!("tick pump disabled");
            self.ctrl.send(PumpOp::Stop).ok();
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.running
    }
}

impl Drop for TickPump {
    fn drop(&mut self) {
        self.ctrl.send(PumpOp::Quit).ok();
        if let Some(handle) = self.handle.take() {
            handle.join().ok();
        }
    }
}

fn pump_thread(ctrl: Receiver<PumpOp>, ticks: Sender<()>) {
    let mut running = false;

    loop {
        if running {
            thread::sleep(Duration::from_millis(TICK_MS));
            if ticks.send(()).is_err() {
                // Receiver gone, owner is shutting down
                break;
            }
        }

        // Check for control messages (non-blocking when running, blocking when stopped)
        let op = if running {
            match ctrl.try_recv() {
                Ok(op) => Some(op),
                Err(TryRecvError::Empty) => None,
                Err(TryRecvError::Disconnected) => break,
            }
        } else {
            match ctrl.recv() {
                Ok(op) => Some(op),
                Err(_) => break,
            }
        };

        match op {
            Some(PumpOp::Start) => running = true,
            Some(PumpOp::Stop) => running = false,
            Some(PumpOp::Quit) => break,
            None => {}
        }
    }
    log::trace!("tick pump thread exiting");
}
