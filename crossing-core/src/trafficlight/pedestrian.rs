/*
 * The pedestrian light has no timer of its own. It is read off the vehicle
 * light every tick, so the two can never drift apart.
 */

use core::fmt;

use super::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PedestrianPhase {
    Walk,
    /// The second half of red: walk is flashing, finish crossing.
    Blinking,
    DontWalk,
}

impl PedestrianPhase {
    pub fn as_str(self) -> &'static str {
        match self {
            PedestrianPhase::Walk => "walk",
            PedestrianPhase::Blinking => "blinking",
            PedestrianPhase::DontWalk => "dont-walk",
        }
    }
}

impl fmt::Display for PedestrianPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn derive(vehicle_phase: Phase, vehicle_elapsed_ms: u32, vehicle_duration_ms: u32) -> PedestrianPhase {
    match vehicle_phase {
        Phase::Green | Phase::Yellow => PedestrianPhase::DontWalk,
        Phase::Red if vehicle_elapsed_ms < vehicle_duration_ms / 2 => PedestrianPhase::Walk,
        Phase::Red => PedestrianPhase::Blinking,
    }
}
