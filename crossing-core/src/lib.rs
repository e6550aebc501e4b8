/*
 * Timing logic for a push-button pedestrian crossing.
 *
 * Everything in here is plain state and arithmetic on millisecond deltas, with
 * no pins, timers or executors. The firmware owns the hardware and feeds this
 * crate one delta and one button sample per loop iteration, which keeps the
 * logic testable on the host.
 */

#![cfg_attr(not(test), no_std)]

pub mod button;
pub mod clock;
pub mod config;
pub mod crossing;
pub mod timed_output_masker;
pub mod trafficlight;

pub use config::{ConfigError, Timing, TimingConfig};
pub use crossing::{Crossing, Tick};
pub use trafficlight::Phase;
pub use trafficlight::pedestrian::PedestrianPhase;
