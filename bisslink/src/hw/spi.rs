// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial Peripheral Interface (SPI) byte transport.
//!
//! - `ByteExchange` is the full-duplex byte interface drivers are written against.
//! - `SpiLink` implements it by polling an [`SpiRegisters`] block: wait for room in the transmit
//!   buffer, write the byte left-justified, wait for transfer complete, read the reply.
//!
//! The peripheral must already be configured (master mode, 8-bit characters, clock polarity and
//! phase) before the first exchange.

use crate::error::{Error, Result};
use crate::hw::regs::{sts, SpiRegisters, TX_SHIFT};
use crate::hw::wait::{poll_until, WaitBound, WaitStage};

/// Poll budget used by [`LinkConfig::default`] for each wait of an exchange.
pub const DEFAULT_POLL_BUDGET: u32 = 10_000;

/// Full-duplex byte exchange over a serial link.
pub trait ByteExchange {
    /// Send one byte and return the byte clocked in at the same time.
    fn exchange_byte(&mut self, byte: u8) -> Result<u8>;

    /// Send every byte of `bytes` in order, discarding the replies.
    ///
    /// Stops at the first failed exchange.
    fn exchange_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        for &b in bytes {
            let _ = self.exchange_byte(b)?;
        }
        Ok(())
    }

    /// Fill `buf` with replies, sending `fill` for every byte read.
    fn read_bytes(&mut self, buf: &mut [u8], fill: u8) -> Result<()> {
        for b in buf.iter_mut() {
            *b = self.exchange_byte(fill)?;
        }
        Ok(())
    }

    /// Transfer a byte buffer in-place.
    fn transfer_in_place(&mut self, buf: &mut [u8]) -> Result<()> {
        for b in buf.iter_mut() {
            *b = self.exchange_byte(*b)?;
        }
        Ok(())
    }
}

/// Wait bounds and checks applied by [`SpiLink`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LinkConfig {
    /// Bound on waiting for room in the transmit buffer.
    pub tx_ready: WaitBound,
    /// Bound on waiting for the transfer-complete flag.
    pub transfer: WaitBound,
    /// Fail an exchange with `Error::Overrun` if the overrun flag is set at completion.
    pub check_overrun: bool,
}

impl LinkConfig {
    /// Spin forever on both waits and never look at the overrun flag.
    pub const fn blocking() -> Self {
        Self {
            tx_ready: WaitBound::Unbounded,
            transfer: WaitBound::Unbounded,
            check_overrun: false,
        }
    }

    /// Bound both waits to `polls` status reads.
    pub const fn with_poll_budget(mut self, polls: u32) -> Self {
        self.tx_ready = WaitBound::Polls(polls);
        self.transfer = WaitBound::Polls(polls);
        self
    }

    /// Enable or disable overrun checking.
    pub const fn with_overrun_check(mut self, enabled: bool) -> Self {
        self.check_overrun = enabled;
        self
    }
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self::blocking().with_poll_budget(DEFAULT_POLL_BUDGET)
    }
}

/// Polled transport over an SPI register block (8-bit characters).
pub struct SpiLink<R> {
    regs: R,
    config: LinkConfig,
}

impl<R: SpiRegisters> SpiLink<R> {
    pub fn new(regs: R, config: LinkConfig) -> Self {
        Self { regs, config }
    }

    /// Clear stale buffer-full and overrun flags left over from peripheral bring-up.
    pub fn init(&mut self) {
        self.regs.clear_flags(sts::BUFFULL_FLAG | sts::OVERRUN_FLAG);
    }

    /// Queue `byte` for transmission if the transmit buffer has room.
    pub fn try_write(&mut self, byte: u8) -> nb::Result<(), Error> {
        if self.regs.status().buffer_full() {
            return Err(nb::Error::WouldBlock);
        }
        self.regs.write_tx((byte as u16) << TX_SHIFT);
        Ok(())
    }

    /// Take the received byte once the transfer has completed.
    pub fn try_read(&mut self) -> nb::Result<u8, Error> {
        let status = self.regs.status();
        if !status.transfer_complete() {
            return Err(nb::Error::WouldBlock);
        }

        if self.config.check_overrun && status.overrun() {
            // Clearing the overrun also discards the stale characters.
            self.regs.clear_flags(sts::OVERRUN_FLAG);
            return Err(nb::Error::Other(Error::Overrun));
        }

        Ok((self.regs.read_rx() & 0x00FF) as u8)
    }

    /// Access the register block.
    #[inline]
    pub fn regs(&self) -> &R {
        &self.regs
    }

    pub fn free(self) -> R {
        self.regs
    }
}

impl<R: SpiRegisters> ByteExchange for SpiLink<R> {
    fn exchange_byte(&mut self, byte: u8) -> Result<u8> {
        let LinkConfig { tx_ready, transfer, .. } = self.config;

        poll_until(tx_ready, WaitStage::TxReady, || self.try_write(byte))?;
        poll_until(transfer, WaitStage::TransferComplete, || self.try_read())
    }
}
