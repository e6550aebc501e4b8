//! Walk request button debouncing.

/// How the button is wired.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// Pulled high; pressing the button pulls the pin low.
    Up,
    /// Pulled low; pressing the button drives the pin high.
    Down,
}

impl Pull {
    fn pressed(self, is_high: bool) -> bool {
        match self {
            Pull::Up => !is_high,
            Pull::Down => is_high,
        }
    }
}

/// Debounce state for one button, driven by elapsed time between samples.
#[derive(Debug, Clone, Copy)]
pub struct Debouncer {
    pull: Pull,
    window_ms: u32,
    /// Last accepted state, true = pressed.
    stable: bool,
    /// Raw state seen on the latest sample.
    candidate: bool,
    /// How long `candidate` has held, not counting the sample it first
    /// appeared on.
    candidate_ms: u32,
}

impl Debouncer {
    pub fn new(pull: Pull, window_ms: u32) -> Self {
        Self {
            pull,
            window_ms,
            stable: false,
            candidate: false,
            candidate_ms: 0,
        }
    }

    pub fn pressed(&self) -> bool {
        self.stable
    }

    /// Feed one raw pin sample taken `delta_ms` after the previous one.
    /// Returns true exactly once per press, when the press has held for the
    /// debounce window.
    pub fn detect_debounced_edge(&mut self, is_high: bool, delta_ms: u32) -> bool {
        let pressed = self.pull.pressed(is_high);

        if pressed != self.candidate {
            self.candidate = pressed;
            self.candidate_ms = 0;
            return false;
        }
        if pressed == self.stable {
            return false;
        }

        self.candidate_ms = self.candidate_ms.saturating_add(delta_ms);
        if self.candidate_ms < self.window_ms {
            return false;
        }

        self.stable = pressed;
        pressed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP_MS: u32 = 10;

    fn feed(debouncer: &mut Debouncer, is_high: bool, samples: usize) -> usize {
        (0..samples)
            .filter(|_| debouncer.detect_debounced_edge(is_high, STEP_MS))
            .count()
    }

    #[test]
    fn press_held_for_window_gives_one_edge() {
        let mut button = Debouncer::new(Pull::Down, 50);
        assert!(!button.detect_debounced_edge(true, STEP_MS));
        for _ in 0..4 {
            assert!(!button.detect_debounced_edge(true, STEP_MS));
        }
        assert!(button.detect_debounced_edge(true, STEP_MS));
        assert!(button.pressed());
        assert_eq!(feed(&mut button, true, 100), 0);
    }

    #[test]
    fn bounce_shorter_than_window_is_ignored() {
        let mut button = Debouncer::new(Pull::Down, 50);
        for _ in 0..20 {
            assert_eq!(feed(&mut button, true, 3), 0);
            assert_eq!(feed(&mut button, false, 1), 0);
        }
        assert!(!button.pressed());
    }

    #[test]
    fn release_is_not_an_edge() {
        let mut button = Debouncer::new(Pull::Down, 50);
        assert_eq!(feed(&mut button, true, 10), 1);
        assert_eq!(feed(&mut button, false, 10), 0);
        assert!(!button.pressed());
        assert_eq!(feed(&mut button, true, 10), 1);
    }

    #[test]
    fn pull_up_is_active_low() {
        let mut button = Debouncer::new(Pull::Up, 50);
        assert_eq!(feed(&mut button, true, 20), 0);
        assert_eq!(feed(&mut button, false, 20), 1);
        assert!(button.pressed());
    }

    #[test]
    fn one_long_sample_gap_counts() {
        let mut button = Debouncer::new(Pull::Down, 50);
        assert!(!button.detect_debounced_edge(true, 5));
        assert!(button.detect_debounced_edge(true, 60));
    }
}
