/*
 * The control loop only ever needs "how long since last time". Clocks on the
 * board are free-running millisecond counters that wrap at 2^32, roughly every
 * 49.7 days. Wrapping subtraction keeps the delta right across the wrap, as
 * long as the loop runs at least once per wrap period.
 */

pub trait Clock {
    fn now_ms(&self) -> u32;
}

pub struct DeltaClock<C: Clock> {
    clock: C,
    previous_ms: u32,
}

impl<C: Clock> DeltaClock<C> {
    pub fn new(clock: C) -> Self {
        let previous_ms = clock.now_ms();
        DeltaClock { clock, previous_ms }
    }

    pub fn delta_ms(&mut self) -> u32 {
        let now_ms = self.clock.now_ms();
        let delta_ms = now_ms.wrapping_sub(self.previous_ms);
        self.previous_ms = now_ms;
        delta_ms
    }
}
