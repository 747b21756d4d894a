// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! BiSS-C / SSI absolute encoder read over SPI.
//!
//! The encoder is read-only: each poll cycle clocks out four fill bytes and captures the four
//! bytes the encoder shifts back. The link is not owned here and must be passed in as `&mut` so
//! that several devices can share one bus.

use crate::error::Result;
use crate::hw::ByteExchange;
use crate::protocol::{decode, DecodedSample, FrameFormat, RawFrame, FRAME_LEN};

/// Byte clocked out while reading a frame.
pub const FILL_BYTE: u8 = 0x00;

/// Chip-select control around one frame read.
pub trait FrameSelect {
    fn select(&mut self);
    fn deselect(&mut self);
}

/// For peripherals that drive chip-select in hardware.
impl FrameSelect for () {
    #[inline]
    fn select(&mut self) {}

    #[inline]
    fn deselect(&mut self) {}
}

/// Absolute encoder bound to a chip-select and a frame layout.
pub struct BissEncoder<CS> {
    cs: CS,
    format: FrameFormat,
}

impl<CS: FrameSelect> BissEncoder<CS> {
    pub fn new(mut cs: CS, format: FrameFormat) -> Self {
        cs.deselect();
        Self { cs, format }
    }

    #[inline]
    pub fn format(&self) -> FrameFormat {
        self.format
    }

    /// Release the chip-select.
    pub fn free(self) -> CS {
        self.cs
    }

    /// Clock in one raw capture.
    ///
    /// Chip-select is released even if an exchange fails.
    pub fn read_raw<L: ByteExchange>(&mut self, link: &mut L) -> Result<RawFrame> {
        let mut buf = [0u8; FRAME_LEN];

        self.cs.select();
        let res = link.read_bytes(&mut buf, FILL_BYTE);
        self.cs.deselect();

        res.map(|_| RawFrame::new(buf))
    }

    /// Read and decode one sample without checking its CRC.
    pub fn read_sample<L: ByteExchange>(&mut self, link: &mut L) -> Result<DecodedSample> {
        let frame = self.read_raw(link)?;
        Ok(decode(frame, self.format))
    }

    /// Read, decode and CRC-check one sample.
    pub fn read_checked<L: ByteExchange>(&mut self, link: &mut L) -> Result<DecodedSample> {
        self.read_sample(link)?.verify(self.format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::hw::WaitStage;

    /// Replays a fixed byte sequence and records what was sent.
    struct Replay {
        rx: Vec<u8>,
        tx: Vec<u8>,
    }

    impl ByteExchange for Replay {
        fn exchange_byte(&mut self, byte: u8) -> Result<u8> {
            self.tx.push(byte);
            if self.rx.is_empty() {
                return Err(Error::TransportTimeout(WaitStage::TransferComplete));
            }
            Ok(self.rx.remove(0))
        }
    }

    #[derive(Default)]
    struct CsLog {
        selected: bool,
        selects: u32,
        deselects: u32,
    }

    impl FrameSelect for CsLog {
        fn select(&mut self) {
            self.selected = true;
            self.selects += 1;
        }

        fn deselect(&mut self) {
            self.selected = false;
            self.deselects += 1;
        }
    }

    #[test]
    fn reads_four_bytes_with_fill() {
        let mut link = Replay {
            rx: vec![0x48, 0xD1, 0x73, 0x40],
            tx: Vec::new(),
        };
        let mut enc = BissEncoder::new((), FrameFormat::default());

        let frame = enc.read_raw(&mut link).unwrap();
        assert_eq!(frame.bytes(), [0x48, 0xD1, 0x73, 0x40]);
        assert_eq!(link.tx, vec![FILL_BYTE; FRAME_LEN]);
    }

    #[test]
    fn chip_select_wraps_the_read() {
        let mut link = Replay {
            rx: vec![0; FRAME_LEN],
            tx: Vec::new(),
        };
        let mut enc = BissEncoder::new(CsLog::default(), FrameFormat::default());
        enc.read_raw(&mut link).unwrap();

        let cs = enc.free();
        assert!(!cs.selected);
        assert_eq!(cs.selects, 1);
        // One from construction, one after the read.
        assert_eq!(cs.deselects, 2);
    }

    #[test]
    fn chip_select_released_on_error() {
        let mut link = Replay {
            rx: vec![0x00, 0x00],
            tx: Vec::new(),
        };
        let mut enc = BissEncoder::new(CsLog::default(), FrameFormat::default());

        assert_eq!(
            enc.read_raw(&mut link),
            Err(Error::TransportTimeout(WaitStage::TransferComplete))
        );
        assert!(!enc.free().selected);
    }

    #[test]
    fn checked_read_accepts_valid_crc() {
        let mut link = Replay {
            rx: vec![0x48, 0xD1, 0x73, 0x40],
            tx: Vec::new(),
        };
        let mut enc = BissEncoder::new((), FrameFormat::default());

        let s = enc.read_checked(&mut link).unwrap();
        assert_eq!(s.position, 0x12345);
        assert_eq!(s.error_bits, 0b11);
        assert_eq!(s.crc, 0x0D);
    }

    #[test]
    fn checked_read_rejects_corrupted_frame() {
        // Lowest position bit flipped.
        let mut link = Replay {
            rx: vec![0x48, 0xD1, 0x33, 0x40],
            tx: Vec::new(),
        };
        let mut enc = BissEncoder::new((), FrameFormat::default());

        assert_eq!(
            enc.read_checked(&mut link),
            Err(Error::CrcMismatch {
                expected: 0x01,
                received: 0x0D,
            })
        );
    }
}
