/*
 * The whole crossing: one vehicle light, the pedestrian light read off it, and
 * the walk request button. The control loop owns a single `Crossing` and calls
 * `tick` once per iteration.
 *
 * Within a tick the order is fixed. The button edge is latched first, so a
 * press in this tick can already end the green phase. The vehicle light moves
 * next, and the pedestrian light is derived last from wherever the vehicle
 * light ended up.
 */

use crate::config::{Timing, WalkRequestMode};
use crate::trafficlight::pedestrian::{self, PedestrianPhase};
use crate::trafficlight::walk_request::WalkRequestLatch;
use crate::trafficlight::{Phase, VehiclePhaseController};

/// What the crossing looks like after one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub phase: Phase,
    pub elapsed_ms: u32,
    pub pedestrian: PedestrianPhase,
    pub walk_requested: bool,
    /// The vehicle light entered `phase` during this tick.
    pub transitioned: bool,
}

#[derive(Debug)]
pub struct Crossing {
    timing: Timing,
    vehicle: VehiclePhaseController,
    latch: WalkRequestLatch,
}

impl Crossing {
    pub fn new(timing: Timing) -> Self {
        Crossing {
            vehicle: VehiclePhaseController::new(&timing),
            latch: WalkRequestLatch::new(timing.latch_clear()),
            timing,
        }
    }

    pub fn timing(&self) -> &Timing {
        &self.timing
    }

    /// The state before any tick has run.
    pub fn current(&self) -> Tick {
        let phase = self.vehicle.phase();
        let elapsed_ms = self.vehicle.elapsed_ms();
        Tick {
            phase,
            elapsed_ms,
            pedestrian: pedestrian::derive(phase, elapsed_ms, self.timing.duration(phase)),
            walk_requested: self.latch.pending(),
            transitioned: false,
        }
    }

    pub fn tick(&mut self, delta_ms: u32, button_edge: bool) -> Tick {
        let walk_requested = match self.timing.walk_request() {
            WalkRequestMode::Disabled => false,
            WalkRequestMode::EarlyExit { .. } => self.latch.update(button_edge),
        };

        let before = self.vehicle.phase();
        let (phase, elapsed_ms) = self.vehicle.tick(delta_ms, walk_requested);
        let transitioned = phase != before;
        if transitioned {
            self.latch.clear_on_phase(phase);
        }

        Tick {
            phase,
            elapsed_ms,
            pedestrian: pedestrian::derive(phase, elapsed_ms, self.timing.duration(phase)),
            walk_requested: self.latch.pending(),
            transitioned,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{LatchClear, TimingConfig};

    fn push_button() -> Crossing {
        Crossing::new(Timing::PUSH_BUTTON)
    }

    #[test]
    fn initial_state_is_green_dont_walk() {
        let crossing = push_button();
        let tick = crossing.current();
        assert_eq!(tick.phase, Phase::Green);
        assert_eq!(tick.elapsed_ms, 0);
        assert_eq!(tick.pedestrian, PedestrianPhase::DontWalk);
        assert!(!tick.walk_requested);
        assert!(!tick.transitioned);
    }

    #[test]
    fn red_walk_blink_then_green() {
        let mut crossing = push_button();
        crossing.tick(15_000, false);
        let tick = crossing.tick(2_000, false);
        assert_eq!((tick.phase, tick.pedestrian), (Phase::Red, PedestrianPhase::Walk));
        assert!(tick.transitioned);

        let tick = crossing.tick(4_999, false);
        assert_eq!(tick.pedestrian, PedestrianPhase::Walk);
        let tick = crossing.tick(1, false);
        assert_eq!(tick.pedestrian, PedestrianPhase::Blinking);
        let tick = crossing.tick(5_000, false);
        assert_eq!((tick.phase, tick.pedestrian), (Phase::Green, PedestrianPhase::DontWalk));
        assert!(tick.transitioned);
    }

    #[test]
    fn press_in_the_same_tick_can_end_green() {
        let mut crossing = push_button();
        crossing.tick(6_000, false);
        let tick = crossing.tick(10, true);
        assert_eq!(tick.phase, Phase::Yellow);
        assert!(tick.walk_requested);
    }

    #[test]
    fn request_latched_at_zero_waits_for_one_third() {
        let mut crossing = push_button();
        assert!(crossing.tick(0, true).walk_requested);
        let tick = crossing.tick(4_999, false);
        assert_eq!(tick.phase, Phase::Green);
        let tick = crossing.tick(1, false);
        assert_eq!(tick.phase, Phase::Yellow);
    }

    #[test]
    fn latch_clears_on_red_entry() {
        let mut crossing = push_button();
        crossing.tick(1, true);
        assert!(crossing.tick(5_000, false).walk_requested);
        let tick = crossing.tick(2_000, false);
        assert_eq!(tick.phase, Phase::Red);
        assert!(!tick.walk_requested);
    }

    #[test]
    fn press_during_red_carries_into_next_green() {
        let mut crossing = push_button();
        crossing.tick(15_000, false);
        crossing.tick(2_000, false);
        assert!(crossing.tick(1_000, true).walk_requested);
        let tick = crossing.tick(9_000, false);
        assert_eq!(tick.phase, Phase::Green);
        assert!(tick.walk_requested);
        assert_eq!(crossing.tick(5_000, false).phase, Phase::Yellow);
    }

    #[test]
    fn timed_profile_never_latches() {
        let mut crossing = Crossing::new(Timing::TIMED);
        let tick = crossing.tick(5_000, true);
        assert!(!tick.walk_requested);
        assert_eq!(tick.phase, Phase::Green);
        assert_eq!(crossing.tick(5_000, true).phase, Phase::Yellow);
    }

    #[test]
    fn green_entry_variant_holds_request_through_red() {
        let config = TimingConfig {
            latch_clear: LatchClear::OnGreenEntry,
            ..TimingConfig::PUSH_BUTTON
        };
        let timing = match config.validate() {
            Ok(timing) => timing,
            Err(error) => panic!("{error}"),
        };
        let mut crossing = Crossing::new(timing);
        crossing.tick(0, true);
        crossing.tick(5_000, false);
        let tick = crossing.tick(2_000, false);
        assert_eq!(tick.phase, Phase::Red);
        assert!(tick.walk_requested);
        let tick = crossing.tick(10_000, false);
        assert_eq!(tick.phase, Phase::Green);
        assert!(!tick.walk_requested);
    }
}
