// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Raw BiSS/SSI frame layout and field extraction.
//!
//! One sample is captured as four bytes clocked in MSB-first. Read as a big-endian 32-bit word the
//! capture is laid out as:
//!
//! | Bits    | Field |
//! | ------- | ----- |
//! | 31      | start bit (ignored) |
//! | 30..14  | position, right-aligned at bit 14, up to 17 bits |
//! | 13..12  | error bits (`nE`, `nW`, active-low) |
//! | 11..6   | CRC-6, inverted |
//! | 5..0    | stop / timeout (ignored) |
//!
//! For a 17-bit position this is:
//!
//! ```text
//! position   = (b0 & 0x7F) << 10 | b1 << 2 | (b2 & 0xC0) >> 6
//! error_bits = (b2 & 0x30) >> 4
//! crc        = (b2 & 0x0F) << 2 | (b3 & 0xC0) >> 6
//! ```

use core::fmt;

use crate::error::{Error, Result};
use crate::protocol::crc;

/// Number of bytes in one raw capture.
pub const FRAME_LEN: usize = 4;

/// Widest position field the frame can carry.
pub const MAX_POSITION_BITS: u8 = 17;

const POSITION_SHIFT: u32 = 14;
const ERROR_SHIFT: u32 = 12;
const ERROR_MASK: u32 = 0x3;
const CRC_SHIFT: u32 = 6;
const CRC_MASK: u32 = 0x3F;

/// Frame layout parameters for a particular encoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FrameFormat {
    position_bits: u8,
}

impl FrameFormat {
    /// Layout with a `position_bits` wide position, clamped to `1..=17`.
    pub const fn new(position_bits: u8) -> Self {
        let position_bits = if position_bits < 1 {
            1
        } else if position_bits > MAX_POSITION_BITS {
            MAX_POSITION_BITS
        } else {
            position_bits
        };
        Self { position_bits }
    }

    #[inline]
    pub const fn position_bits(&self) -> u8 {
        self.position_bits
    }

    #[inline]
    pub const fn position_mask(&self) -> u32 {
        (1 << self.position_bits) - 1
    }

    /// Position counts in one mechanical revolution.
    #[inline]
    pub const fn counts_per_rev(&self) -> u32 {
        1 << self.position_bits
    }
}

impl Default for FrameFormat {
    fn default() -> Self {
        Self::new(MAX_POSITION_BITS)
    }
}

/// Four bytes exactly as clocked in from the encoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawFrame {
    bytes: [u8; FRAME_LEN],
}

impl RawFrame {
    #[inline]
    pub const fn new(bytes: [u8; FRAME_LEN]) -> Self {
        Self { bytes }
    }

    #[inline]
    pub fn bytes(&self) -> [u8; FRAME_LEN] {
        self.bytes
    }

    /// The capture as a big-endian word, first byte most significant.
    #[inline]
    pub fn word(&self) -> u32 {
        u32::from_be_bytes(self.bytes)
    }

    /// Decode with the default 17-bit layout.
    #[inline]
    pub fn decode(self) -> DecodedSample {
        decode(self, FrameFormat::default())
    }

    /// Build the capture an encoder would send for `sample`. Start and stop bits are zero.
    pub fn pack(sample: &DecodedSample, format: FrameFormat) -> Self {
        let word = (sample.position & format.position_mask()) << POSITION_SHIFT
            | (sample.error_bits as u32 & ERROR_MASK) << ERROR_SHIFT
            | (sample.crc as u32 & CRC_MASK) << CRC_SHIFT;

        Self::new(word.to_be_bytes())
    }
}

impl From<[u8; FRAME_LEN]> for RawFrame {
    fn from(bytes: [u8; FRAME_LEN]) -> Self {
        Self::new(bytes)
    }
}

/// Fields extracted from one raw capture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedSample {
    /// Absolute position in counts.
    pub position: u32,
    /// Error (bit 1) and warning (bit 0) flags, active-low.
    pub error_bits: u8,
    /// CRC-6 as transmitted.
    pub crc: u8,
}

impl DecodedSample {
    /// Sample for `position` and `error_bits` carrying the CRC the encoder would send.
    pub fn with_valid_crc(position: u32, error_bits: u8, format: FrameFormat) -> Self {
        let mut sample = Self {
            position: position & format.position_mask(),
            error_bits: error_bits & ERROR_MASK as u8,
            crc: 0,
        };
        sample.crc = sample.expected_crc(format);
        sample
    }

    /// Encoder error flag. The `nE` bit is low when the encoder reports an error.
    #[inline]
    pub fn error_active(&self) -> bool {
        (self.error_bits & (1 << 1)) == 0
    }

    /// Encoder warning flag. The `nW` bit is low when the encoder reports a warning.
    #[inline]
    pub fn warning_active(&self) -> bool {
        (self.error_bits & (1 << 0)) == 0
    }

    /// CRC computed over position and error bits, inverted as on the wire.
    pub fn expected_crc(&self, format: FrameFormat) -> u8 {
        let bits = format.position_bits() as u32 + 2;
        let data = (self.position & format.position_mask()) << 2
            | (self.error_bits as u32 & ERROR_MASK);
        crc::crc6_inverted(data, bits)
    }

    /// Check the carried CRC against the payload.
    pub fn verify(self, format: FrameFormat) -> Result<Self> {
        let expected = self.expected_crc(format);
        if expected != self.crc {
            return Err(Error::CrcMismatch {
                expected,
                received: self.crc,
            });
        }
        Ok(self)
    }

    /// Position as a fraction of one revolution, in `[0.0, 1.0)`.
    #[inline]
    pub fn turns(&self, format: FrameFormat) -> f32 {
        (self.position & format.position_mask()) as f32 / format.counts_per_rev() as f32
    }

    /// Position in degrees, in `[0.0, 360.0)`.
    #[inline]
    pub fn degrees(&self, format: FrameFormat) -> f32 {
        self.turns(format) * 360.0
    }
}

impl fmt::Display for DecodedSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "pos={} err={:02b} crc=0x{:02X}",
            self.position, self.error_bits, self.crc
        )
    }
}

/// Extract position, error bits and CRC from a raw capture.
///
/// Pure: the result depends only on `frame` and `format`. No validation is done here; see
/// [`DecodedSample::verify`].
pub fn decode(frame: RawFrame, format: FrameFormat) -> DecodedSample {
    let word = frame.word();

    DecodedSample {
        position: (word >> POSITION_SHIFT) & format.position_mask(),
        error_bits: ((word >> ERROR_SHIFT) & ERROR_MASK) as u8,
        crc: ((word >> CRC_SHIFT) & CRC_MASK) as u8,
    }
}
