// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Error type shared by the transport and the frame decoder.

use core::fmt;

use crate::hw::WaitStage;

pub type Result<T> = core::result::Result<T, Error>;

/// Error type for link and frame operations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// A bounded busy-wait ran out of polls before the peripheral was ready.
    TransportTimeout(WaitStage),
    /// The receive register was overwritten before it was read.
    Overrun,
    /// The CRC carried in the frame does not match the one computed over its payload.
    CrcMismatch { expected: u8, received: u8 },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::TransportTimeout(stage) => write!(f, "SPI timeout waiting for {}", stage),
            Error::Overrun => write!(f, "SPI receive overrun"),
            Error::CrcMismatch { expected, received } => write!(
                f,
                "CRC mismatch: expected 0x{:02X}, received 0x{:02X}",
                expected, received
            ),
        }
    }
}
