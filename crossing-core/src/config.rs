/*
 * Compile-time timing profiles for the crossing.
 *
 * The board ships with two profiles. The push-button profile has a long green
 * phase that a pedestrian request may cut short. The timed profile has no
 * request button at all and simply cycles. The two are kept apart on purpose:
 * a timed crossing never honours a request, and a push-button crossing never
 * runs the short green.
 *
 * A profile is checked by `TimingConfig::validate`, which is a `const fn`. The
 * firmware validates its profile in a `const` item, so a zero duration is a
 * build failure rather than a light that busy-cycles every tick.
 */

use enum_ordinalize::Ordinalize;
use thiserror::Error;

use crate::trafficlight::Phase;

pub const RED_MS: u32 = 10_000;
pub const YELLOW_MS: u32 = 2_000;
pub const GREEN_PUSH_BUTTON_MS: u32 = 15_000;
pub const GREEN_TIMED_MS: u32 = 10_000;
pub const BLINK_HALF_PERIOD_MS: u32 = 500;
pub const DEBOUNCE_MS: u32 = 50;
pub const EARLY_EXIT_DIVISOR: u32 = 3;

/// How a pending walk request affects the green phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkRequestMode {
    /// No request button; green always runs its full duration.
    Disabled,
    /// A pending request ends green once `duration(Green) / divisor` has
    /// elapsed.
    EarlyExit { divisor: u32 },
}

/// The phase whose entry clears a pending walk request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchClear {
    OnRedEntry,
    OnGreenEntry,
}

impl LatchClear {
    pub fn phase(self) -> Phase {
        match self {
            LatchClear::OnRedEntry => Phase::Red,
            LatchClear::OnGreenEntry => Phase::Green,
        }
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} phase duration must be positive")]
    ZeroPhaseDuration(Phase),

    #[error("warning blink half-period must be positive")]
    ZeroBlinkHalfPeriod,

    #[error("early-exit divisor must be positive")]
    ZeroEarlyExitDivisor,
}

/// Unchecked timing settings, all in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    pub green_ms: u32,
    pub yellow_ms: u32,
    pub red_ms: u32,
    pub blink_half_period_ms: u32,
    pub debounce_ms: u32,
    pub walk_request: WalkRequestMode,
    pub latch_clear: LatchClear,
}

impl TimingConfig {
    pub const PUSH_BUTTON: TimingConfig = TimingConfig {
        green_ms: GREEN_PUSH_BUTTON_MS,
        yellow_ms: YELLOW_MS,
        red_ms: RED_MS,
        blink_half_period_ms: BLINK_HALF_PERIOD_MS,
        debounce_ms: DEBOUNCE_MS,
        walk_request: WalkRequestMode::EarlyExit {
            divisor: EARLY_EXIT_DIVISOR,
        },
        latch_clear: LatchClear::OnRedEntry,
    };

    pub const TIMED: TimingConfig = TimingConfig {
        green_ms: GREEN_TIMED_MS,
        yellow_ms: YELLOW_MS,
        red_ms: RED_MS,
        blink_half_period_ms: BLINK_HALF_PERIOD_MS,
        debounce_ms: DEBOUNCE_MS,
        walk_request: WalkRequestMode::Disabled,
        latch_clear: LatchClear::OnRedEntry,
    };

    pub const fn validate(self) -> Result<Timing, ConfigError> {
        if self.green_ms == 0 {
            return Err(ConfigError::ZeroPhaseDuration(Phase::Green));
        }
        if self.yellow_ms == 0 {
            return Err(ConfigError::ZeroPhaseDuration(Phase::Yellow));
        }
        if self.red_ms == 0 {
            return Err(ConfigError::ZeroPhaseDuration(Phase::Red));
        }
        if self.blink_half_period_ms == 0 {
            return Err(ConfigError::ZeroBlinkHalfPeriod);
        }
        if let WalkRequestMode::EarlyExit { divisor: 0 } = self.walk_request {
            return Err(ConfigError::ZeroEarlyExitDivisor);
        }

        Ok(Timing {
            // Indexed by `Phase` ordinal: Green, Yellow, Red.
            durations: [self.green_ms, self.yellow_ms, self.red_ms],
            blink_half_period_ms: self.blink_half_period_ms,
            debounce_ms: self.debounce_ms,
            walk_request: self.walk_request,
            latch_clear: self.latch_clear,
        })
    }
}

/// A validated timing profile. Every duration in it is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    durations: [u32; Phase::VARIANT_COUNT],
    blink_half_period_ms: u32,
    debounce_ms: u32,
    walk_request: WalkRequestMode,
    latch_clear: LatchClear,
}

impl Timing {
    pub const PUSH_BUTTON: Timing = match TimingConfig::PUSH_BUTTON.validate() {
        Ok(timing) => timing,
        Err(_) => panic!("push-button timing profile is invalid"),
    };

    pub const TIMED: Timing = match TimingConfig::TIMED.validate() {
        Ok(timing) => timing,
        Err(_) => panic!("timed profile is invalid"),
    };

    pub fn duration(&self, phase: Phase) -> u32 {
        self.durations[phase.ordinal()]
    }

    pub const fn blink_half_period_ms(&self) -> u32 {
        self.blink_half_period_ms
    }

    pub const fn debounce_ms(&self) -> u32 {
        self.debounce_ms
    }

    pub const fn walk_request(&self) -> WalkRequestMode {
        self.walk_request
    }

    pub const fn latch_clear(&self) -> LatchClear {
        self.latch_clear
    }

    /*
     * The green elapsed time from which a pending request ends the green
     * phase, or `None` when this profile ignores requests.
     */
    pub fn early_exit_ms(&self) -> Option<u32> {
        match self.walk_request {
            WalkRequestMode::Disabled => None,
            WalkRequestMode::EarlyExit { divisor } => Some(self.duration(Phase::Green) / divisor),
        }
    }
}
