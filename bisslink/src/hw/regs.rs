// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SPI peripheral register model.
//!
//! The transport never touches memory directly. A platform implements [`SpiRegisters`] for its
//! peripheral (memory-mapped registers on target, a plain struct in tests) and the transport reads
//! the status register through the typed [`Status`] view.
//!
//! The model follows a 16-bit SPI block with:
//! - a status register carrying overrun, transfer-complete and buffer-full flags,
//! - a transmit buffer into which characters are written left-justified,
//! - a receive buffer from which characters are read right-justified.

/// Status register bit positions.
pub mod sts {
    /// Receive overrun: a new character arrived before the previous one was read.
    pub const OVERRUN_FLAG: u16 = 1 << 7;
    /// Transfer complete: a character has been shifted in and is ready in the receive buffer.
    pub const INT_FLAG: u16 = 1 << 6;
    /// Transmit buffer full: a character is still waiting to be moved to the shift register.
    pub const BUFFULL_FLAG: u16 = 1 << 5;
}

/// Character length used on the link, in bits.
pub const CHAR_BITS: u16 = 8;

/// Shift that left-justifies one character in the 16-bit transmit buffer.
pub const TX_SHIFT: u16 = 16 - CHAR_BITS;

/// Snapshot of the SPI status register.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Status {
    raw: u16,
}

impl Status {
    #[inline]
    pub const fn from_raw(raw: u16) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn raw(&self) -> u16 {
        self.raw
    }

    /// Receive overrun.
    #[inline]
    pub fn overrun(&self) -> bool {
        (self.raw & sts::OVERRUN_FLAG) != 0
    }

    /// Transfer complete, receive buffer holds a fresh character.
    #[inline]
    pub fn transfer_complete(&self) -> bool {
        (self.raw & sts::INT_FLAG) != 0
    }

    /// Transmit buffer full.
    #[inline]
    pub fn buffer_full(&self) -> bool {
        (self.raw & sts::BUFFULL_FLAG) != 0
    }
}

/// Register-level access to one SPI peripheral.
///
/// Implementations must reproduce the hardware side effects the transport relies on: reading the
/// receive buffer clears the transfer-complete flag, and writing the transmit buffer starts a
/// transfer once the shift register is free.
pub trait SpiRegisters {
    /// Read the status register.
    fn status(&self) -> Status;

    /// Write a left-justified character into the transmit buffer.
    fn write_tx(&mut self, word: u16);

    /// Read the receive buffer. The character is right-justified.
    fn read_rx(&mut self) -> u16;

    /// Clear the status flags selected by `mask` (see [`sts`]).
    ///
    /// Clearing `OVERRUN_FLAG` also discards every character still held in the receive buffer,
    /// leaving the transfer-complete flag clear.
    fn clear_flags(&mut self, mask: u16);
}
