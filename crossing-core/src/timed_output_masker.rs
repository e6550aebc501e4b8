/*
 * The pedestrian warning blinks, but the crossing logic should not have to
 * care about blink timing. It only says "walk, blinking" and this module turns
 * that into an output that is on for one half-period and off for the next.
 *
 * Setting the desired channel state is kept apart from producing the pin
 * levels. The control logic sets a descriptor per channel, which records
 * whether the channel is on and whether it is subject to the blink timer.
 * Each loop iteration then advances the timer and masks the descriptors into
 * plain levels, inverting the active-low channels on the way.
 */

use enum_ordinalize::Ordinalize;

use crate::crossing::Tick;
use crate::trafficlight::pedestrian::PedestrianPhase;

#[derive(Ordinalize, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(usize)]
pub enum Channel {
    VehicleRed,
    VehicleYellow,
    VehicleGreen,
    PedestrianWalk,
    PedestrianDontWalk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OutputStateDescriptor {
    on: bool,
    subject_to_blink: bool,
}

impl OutputStateDescriptor {
    const fn new() -> Self {
        OutputStateDescriptor {
            on: false,
            subject_to_blink: false,
        }
    }
}

#[derive(Debug)]
pub struct TimedOutputMasker {
    output_descriptors: [OutputStateDescriptor; Channel::VARIANT_COUNT],
    active_lows: [bool; Channel::VARIANT_COUNT],
    half_period_ms: u32,
    blink_elapsed_ms: u32,
    blink_value: bool,
}

impl TimedOutputMasker {
    /// `half_period_ms` must be positive; a validated `Timing` guarantees it.
    pub const fn new(active_lows: [bool; Channel::VARIANT_COUNT], half_period_ms: u32) -> Self {
        TimedOutputMasker {
            output_descriptors: [OutputStateDescriptor::new(); Channel::VARIANT_COUNT],
            active_lows,
            half_period_ms,
            blink_elapsed_ms: 0,
            blink_value: true,
        }
    }

    /*
     * Keep all time functions outside this module so it can be tested on the
     * host. The caller passes the time since the previous call.
     */
    pub fn update(&mut self, delta_ms: u32) -> [bool; Channel::VARIANT_COUNT] {
        self.advance_blink(delta_ms);
        self.mask_output_pins()
    }

    fn advance_blink(&mut self, delta_ms: u32) {
        let total_ms = self.blink_elapsed_ms.saturating_add(delta_ms);
        let toggles = total_ms / self.half_period_ms;
        self.blink_elapsed_ms = total_ms % self.half_period_ms;
        if toggles % 2 == 1 {
            self.blink_value = !self.blink_value;
        }
    }

    fn mask_output_pins(&self) -> [bool; Channel::VARIANT_COUNT] {
        let mut outputs = [false; Channel::VARIANT_COUNT];
        for (i, output) in outputs.iter_mut().enumerate() {
            let descriptor = &self.output_descriptors[i];
            *output = descriptor.on;

            if descriptor.subject_to_blink {
                *output &= self.blink_value;
            }
            if self.active_lows[i] {
                *output = !*output;
            }
        }

        outputs
    }

    pub fn set_on_off(&mut self, channel: Channel, on: bool) {
        self.set_channel(channel, on, false);
    }

    /// Turn `channel` on, blinking. A channel that starts blinking restarts
    /// the blink timer, so the first half-period is always lit.
    pub fn set_blinking(&mut self, channel: Channel) {
        if !self.output_descriptors[channel.ordinal()].subject_to_blink {
            self.blink_elapsed_ms = 0;
            self.blink_value = true;
        }
        self.set_channel(channel, true, true);
    }

    fn set_channel(&mut self, channel: Channel, on: bool, subject_to_blink: bool) {
        self.output_descriptors[channel.ordinal()] = OutputStateDescriptor {
            on,
            subject_to_blink,
        }
    }

    /// Map a crossing tick onto the five channels.
    pub fn show(&mut self, tick: &Tick) {
        self.set_on_off(Channel::VehicleRed, tick.phase.red());
        self.set_on_off(Channel::VehicleYellow, tick.phase.amber());
        self.set_on_off(Channel::VehicleGreen, tick.phase.green());

        match tick.pedestrian {
            PedestrianPhase::Walk => {
                self.set_on_off(Channel::PedestrianWalk, true);
                self.set_on_off(Channel::PedestrianDontWalk, false);
            }
            PedestrianPhase::Blinking => {
                self.set_blinking(Channel::PedestrianWalk);
                self.set_on_off(Channel::PedestrianDontWalk, false);
            }
            PedestrianPhase::DontWalk => {
                self.set_on_off(Channel::PedestrianWalk, false);
                self.set_on_off(Channel::PedestrianDontWalk, true);
            }
        }
    }
}
