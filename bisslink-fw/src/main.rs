// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Encoder polling firmware.
//!
//! Reads a BiSS-C absolute encoder on SPI4 every `POLL_PERIOD_US`, checks the CRC of every frame
//! and reports the latest sample plus error counters on the USART1 debug port.

#![no_main]
#![no_std]

use core::fmt::Write;

use cortex_m::delay::Delay;
use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    spi::{Mode, Phase, Polarity, Spi},
};
use stm32f7xx_hal as hal;

use bisslink::drivers::BissEncoder;
use bisslink::hw::{LinkConfig, SpiLink};
use bisslink::protocol::FrameFormat;

mod hw;
mod stats;

use hw::{DebugPort, EncoderSelect, EncoderSpi};
use stats::PollStats;

/// Time between two encoder reads.
const POLL_PERIOD_US: u32 = 200;

/// SPI clock.
const SPI_CLOCK_KHZ: u32 = 500;

/// Status reads allowed per wait before an exchange is abandoned.
const POLL_BUDGET: u32 = 2_000;

/// Print a report after this many poll cycles.
const REPORT_EVERY: u32 = 5_000;

const DEBUG_BAUD: u32 = 115_200;

/// Encoder resolution.
const POSITION_BITS: u8 = 17;

/// Clock idles high, data driven on the falling edge and sampled on the rising edge.
const ENCODER_SPI_MODE: Mode = Mode {
    polarity: Polarity::IdleHigh,
    phase: Phase::CaptureOnSecondTransition,
};

#[entry]
fn main() -> ! {
    // Peripherals
    let dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();
    let mut apb2 = rcc.apb2;

    // GPIO
    let gpioa = dp.GPIOA.split();
    let gpiod = dp.GPIOD.split();
    let gpioe = dp.GPIOE.split();

    // Status LED, active-low
    let mut led = gpiod.pd9.into_push_pull_output();
    led.set_high();

    // USART1 (DBG)
    let tx = gpioa.pa9.into_alternate::<7>();
    let rx = gpioa.pa10.into_alternate::<7>();
    let usart_cfg = Config {
        baud_rate: DEBUG_BAUD.bps(),
        ..Default::default()
    };
    let serial = Serial::new(dp.USART1, (tx, rx), &clocks, usart_cfg);
    let mut term = DebugPort::new(serial);

    // SPI4 -> encoder
    let sck = gpioe.pe12.into_alternate::<5>();
    let miso = gpioe.pe13.into_alternate::<5>();
    let mosi = gpioe.pe14.into_alternate::<5>();
    let spi4 = Spi::new(dp.SPI4, (sck, miso, mosi)).enable::<u8>(
        ENCODER_SPI_MODE,
        SPI_CLOCK_KHZ.kHz(),
        &clocks,
        &mut apb2,
    );

    let link_cfg = LinkConfig::default()
        .with_poll_budget(POLL_BUDGET)
        .with_overrun_check(true);
    let mut link = SpiLink::new(EncoderSpi::new(spi4), link_cfg);
    link.init();

    let format = FrameFormat::new(POSITION_BITS);
    let cs = EncoderSelect::new(gpioe.pe4.into_push_pull_output());
    let mut encoder = BissEncoder::new(cs, format);

    // SysTick delay
    let mut delay = Delay::new(cp.SYST, clocks.sysclk().raw());

    term.println("bisslink: polling encoder on SPI4");

    let mut stats = PollStats::default();
    let mut last = None;
    let mut last_error = None;

    loop {
        delay.delay_us(POLL_PERIOD_US);

        let result = encoder.read_checked(&mut link);
        stats.record(&result);

        match result {
            Ok(sample) => last = Some(sample),
            Err(e) => last_error = Some(e),
        }

        if stats.cycles % REPORT_EVERY == 0 {
            match last {
                Some(sample) => term.print_sample(&sample, encoder.format()),
                None => term.println("no valid sample yet"),
            }
            if let Some(e) = last_error.take() {
                let _ = writeln!(term, "last error: {}\r", e);
            }
            term.print_stats(&stats);
            led.toggle();
        }
    }
}
