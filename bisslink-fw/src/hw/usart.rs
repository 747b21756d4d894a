// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debug terminal over USART.
//!
//! Use `writeln!` with an explicit `\r` in the format string so lines end in CRLF on the terminal.
//!
//! To access the terminal on the host machine, connect to the debug USB port and use
//! ```
//! $ screen /dev/tty.usbmodem* <baud_rate>
//! ```

use core::fmt::{self, Write};
use nb::block;

use bisslink::protocol::{DecodedSample, FrameFormat};

use crate::stats::PollStats;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

pub struct DebugPort<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> DebugPort<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    #[inline]
    fn write_byte(&mut self, b: u8) {
        let _ = block!(self.tx.write(b));
    }

    /// Write string and CRLF terminator.
    pub fn println(&mut self, s: &str) {
        let _ = self.write_str(s);
        let _ = self.write_str("\r\n");
    }

    /// Print the latest sample in counts and degrees.
    pub fn print_sample(&mut self, sample: &DecodedSample, format: FrameFormat) {
        let _ = write!(self, "{} ({:.2} deg)", sample, sample.degrees(format));
        if sample.error_active() {
            let _ = self.write_str(" ERR");
        }
        if sample.warning_active() {
            let _ = self.write_str(" WARN");
        }
        let _ = self.write_str("\r\n");
    }

    pub fn print_stats(&mut self, stats: &PollStats) {
        let _ = writeln!(
            self,
            "cycles={} ok={} crc={} timeout={} ovr={} enc_err={} enc_warn={}\r",
            stats.cycles,
            stats.good,
            stats.crc_errors,
            stats.timeouts,
            stats.overruns,
            stats.encoder_errors,
            stats.encoder_warnings
        );
    }
}

impl<U: Instance> fmt::Write for DebugPort<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &b in s.as_bytes() {
            self.write_byte(b);
        }
        Ok(())
    }
}
