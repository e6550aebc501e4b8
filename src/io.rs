/*
 * The I/O module for the crossing.
 *
 * This is the only part of the program that is device-specific. It owns the
 * lamp outputs and the clock, and writes the phase log over the serial port.
 * The crossing logic itself never sees a pin: it gets levels in and hands
 * levels back as plain arrays of `bool`.
 */

use crossing_core::Tick;
use crossing_core::clock::Clock;
use crossing_core::timed_output_masker::Channel;
use embassy_stm32::gpio::{Level, Output};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::{self, Uart};
use embassy_time::Instant;
use enum_ordinalize::Ordinalize;

/// The five lamp outputs, in `Channel` order.
pub struct Lamps {
    outputs: [Output<'static>; Channel::VARIANT_COUNT],
}

impl Lamps {
    pub fn new(outputs: [Output<'static>; Channel::VARIANT_COUNT]) -> Self {
        Self { outputs }
    }

    pub fn apply(&mut self, levels: &[bool; Channel::VARIANT_COUNT]) {
        for (output, on) in self.outputs.iter_mut().zip(levels) {
            output.set_level(if *on { Level::High } else { Level::Low });
        }
    }
}

/// The embassy time driver, truncated to a wrapping 32-bit millisecond count.
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

pub async fn log_tick(usart: &mut Uart<'static, Async>, tick: &Tick) -> Result<(), usart::Error> {
    usart.write(b"vehicle=").await?;
    usart.write(tick.phase.as_str().as_bytes()).await?;
    usart.write(b" pedestrian=").await?;
    usart.write(tick.pedestrian.as_str().as_bytes()).await?;
    if tick.walk_requested {
        usart.write(b" request=pending").await?;
    }
    usart.write(b"\n").await
}
