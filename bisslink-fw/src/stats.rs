// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Poll-cycle bookkeeping.

use bisslink::protocol::DecodedSample;
use bisslink::Error;

/// Counters kept by the polling loop.
#[derive(Copy, Clone, Debug, Default)]
pub struct PollStats {
    pub cycles: u32,
    pub good: u32,
    pub crc_errors: u32,
    pub timeouts: u32,
    pub overruns: u32,
    pub encoder_errors: u32,
    pub encoder_warnings: u32,
}

impl PollStats {
    /// Account for one poll cycle.
    pub fn record(&mut self, result: &Result<DecodedSample, Error>) {
        self.cycles = self.cycles.wrapping_add(1);
        match result {
            Ok(sample) => {
                self.good = self.good.wrapping_add(1);
                if sample.error_active() {
                    self.encoder_errors = self.encoder_errors.wrapping_add(1);
                }
                if sample.warning_active() {
                    self.encoder_warnings = self.encoder_warnings.wrapping_add(1);
                }
            }
            Err(Error::CrcMismatch { .. }) => self.crc_errors = self.crc_errors.wrapping_add(1),
            Err(Error::TransportTimeout(_)) => self.timeouts = self.timeouts.wrapping_add(1),
            Err(Error::Overrun) => self.overruns = self.overruns.wrapping_add(1),
        }
    }
}
