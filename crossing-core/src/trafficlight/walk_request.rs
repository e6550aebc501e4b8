/*
 * A pedestrian pressing the button leaves a request behind that stays until
 * the light serves it. Pressing again while a request is pending does
 * nothing. The request is dropped when the vehicle light enters the clearing
 * phase, which happens once per cycle.
 */

use super::Phase;
use crate::config::LatchClear;

#[derive(Debug)]
pub struct WalkRequestLatch {
    pending: bool,
    clear_on: Phase,
}

impl WalkRequestLatch {
    pub fn new(clear: LatchClear) -> Self {
        WalkRequestLatch {
            pending: false,
            clear_on: clear.phase(),
        }
    }

    pub fn pending(&self) -> bool {
        self.pending
    }

    /// Feed one debounced button edge. Returns whether a request is pending.
    pub fn update(&mut self, edge_detected: bool) -> bool {
        if edge_detected && !self.pending {
            self.pending = true;
        }
        self.pending
    }

    /// Call when the vehicle light has just entered `entered`.
    pub fn clear_on_phase(&mut self, entered: Phase) {
        if entered == self.clear_on {
            self.pending = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_clear() {
        let latch = WalkRequestLatch::new(LatchClear::OnRedEntry);
        assert!(!latch.pending());
    }

    #[test]
    fn edge_sets_and_holds() {
        let mut latch = WalkRequestLatch::new(LatchClear::OnRedEntry);
        assert!(!latch.update(false));
        assert!(latch.update(true));
        assert!(latch.update(false));
        assert!(latch.update(true));
        assert!(latch.pending());
    }

    #[test]
    fn clears_only_on_configured_phase() {
        let mut latch = WalkRequestLatch::new(LatchClear::OnRedEntry);
        latch.update(true);
        latch.clear_on_phase(Phase::Yellow);
        assert!(latch.pending());
        latch.clear_on_phase(Phase::Green);
        assert!(latch.pending());
        latch.clear_on_phase(Phase::Red);
        assert!(!latch.pending());
    }

    #[test]
    fn green_entry_variant() {
        let mut latch = WalkRequestLatch::new(LatchClear::OnGreenEntry);
        latch.update(true);
        latch.clear_on_phase(Phase::Red);
        assert!(latch.pending());
        latch.clear_on_phase(Phase::Green);
        assert!(!latch.pending());
    }
}
