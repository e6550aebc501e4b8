#![no_std]
#![no_main]

use crossing_core::{Crossing, Timing};
use crossing_core::button::{Debouncer, Pull};
use crossing_core::clock::DeltaClock;
use crossing_core::timed_output_masker::{Channel, TimedOutputMasker};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull as PinPull, Speed};
use embassy_stm32::usart::{Config, Uart};
use embassy_stm32::{bind_interrupts, peripherals, usart};
use embassy_time::{Duration, Ticker};
use enum_ordinalize::Ordinalize;
use panic_halt as _;

mod io;
use io::{EmbassyClock, Lamps};

// Checked at compile time: a zero duration fails the build.
const TIMING: Timing = Timing::PUSH_BUTTON;

const LOOP_PERIOD: Duration = Duration::from_millis(10);

// All lamps on this board are active-high.
const ACTIVE_LOWS: [bool; Channel::VARIANT_COUNT] = [false; Channel::VARIANT_COUNT];

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let peripherals = embassy_stm32::init(Default::default());

    bind_interrupts!(struct Irqs {
        USART1 => usart::InterruptHandler<peripherals::USART1>;
    });
    let mut usart = Uart::new(
        peripherals.USART1,
        peripherals.PA10,
        peripherals.PA9,
        Irqs,
        peripherals.DMA1_CH4,
        peripherals.DMA1_CH5,
        Config::default(), // 115200 baud
    )
    .unwrap();

    // Same order as `Channel`.
    let mut lamps = Lamps::new([
        Output::new(peripherals.PB10, Level::Low, Speed::Low),
        Output::new(peripherals.PB12, Level::Low, Speed::Low),
        Output::new(peripherals.PB14, Level::Low, Speed::Low),
        Output::new(peripherals.PB7, Level::Low, Speed::Low),
        Output::new(peripherals.PB9, Level::Low, Speed::Low),
    ]);
    let button = Input::new(peripherals.PE11, PinPull::Up);

    let mut crossing = Crossing::new(TIMING);
    let mut masker = TimedOutputMasker::new(ACTIVE_LOWS, TIMING.blink_half_period_ms());
    let mut debouncer = Debouncer::new(Pull::Up, TIMING.debounce_ms());
    let mut clock = DeltaClock::new(EmbassyClock);
    let mut ticker = Ticker::every(LOOP_PERIOD);

    let initial = crossing.current();
    masker.show(&initial);
    lamps.apply(&masker.update(0));
    let _ = io::log_tick(&mut usart, &initial).await;

    loop {
        let delta_ms = clock.delta_ms();
        let edge = debouncer.detect_debounced_edge(button.is_high(), delta_ms);
        let tick = crossing.tick(delta_ms, edge);

        masker.show(&tick);
        lamps.apply(&masker.update(delta_ms));

        if tick.transitioned || edge {
            // A lost log line must not hold up the lamps.
            let _ = io::log_tick(&mut usart, &tick).await;
        }

        ticker.next().await;
    }
}
