pub mod pedestrian;
pub mod walk_request;

use core::fmt;
use enum_ordinalize::Ordinalize;

use crate::config::Timing;

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Phase {
    Green,
    Yellow,
    Red,
}

impl Phase {
    /*
     * The vehicle cycle has no branches: green, yellow, red, and round again.
     */
    pub fn next(self) -> Phase {
        match self {
            Phase::Green => Phase::Yellow,
            Phase::Yellow => Phase::Red,
            Phase::Red => Phase::Green,
        }
    }

    pub fn red(self) -> bool {
        match self {
            Phase::Red => true,
            Phase::Green | Phase::Yellow => false,
        }
    }

    pub fn amber(self) -> bool {
        match self {
            Phase::Yellow => true,
            Phase::Green | Phase::Red => false,
        }
    }

    pub fn green(self) -> bool {
        match self {
            Phase::Green => true,
            Phase::Yellow | Phase::Red => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Green => "green",
            Phase::Yellow => "yellow",
            Phase::Red => "red",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The vehicle light. Starts in green with nothing elapsed.
#[derive(Debug)]
pub struct VehiclePhaseController {
    phase: Phase,
    elapsed_ms: u32,
    durations: [u32; Phase::VARIANT_COUNT],
    early_exit_ms: Option<u32>,
}

impl VehiclePhaseController {
    pub fn new(timing: &Timing) -> Self {
        VehiclePhaseController {
            phase: Phase::Green,
            elapsed_ms: 0,
            durations: [
                timing.duration(Phase::Green),
                timing.duration(Phase::Yellow),
                timing.duration(Phase::Red),
            ],
            early_exit_ms: timing.early_exit_ms(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn duration(&self, phase: Phase) -> u32 {
        self.durations[phase.ordinal()]
    }

    /*
     * Advance the phase timer by `delta_ms` and move to the next phase if the
     * current one is done. At most one transition happens per call: whatever
     * part of `delta_ms` overshoots the phase boundary is dropped, and the new
     * phase starts at zero.
     */
    pub fn tick(&mut self, delta_ms: u32, walk_requested: bool) -> (Phase, u32) {
        self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

        if self.phase_done(walk_requested) {
            self.phase = self.phase.next();
            self.elapsed_ms = 0;
        }

        (self.phase, self.elapsed_ms)
    }

    fn phase_done(&self, walk_requested: bool) -> bool {
        let full_duration = self.elapsed_ms >= self.duration(self.phase);
        match (self.phase, self.early_exit_ms) {
            (Phase::Green, Some(early_exit_ms)) if walk_requested => {
                full_duration || self.elapsed_ms >= early_exit_ms
            }
            _ => full_duration,
        }
    }
}
