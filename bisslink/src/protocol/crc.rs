// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! BiSS-C CRC-6.
//!
//! Generator polynomial x^6 + x + 1 (0x43), start value 0, data shifted in MSB-first. The encoder
//! transmits the remainder inverted.

/// Generator polynomial, including the x^6 term.
pub const POLY: u8 = 0x43;

/// Width of the CRC in bits.
pub const WIDTH: u32 = 6;

const MASK: u8 = (1 << WIDTH) - 1;

/// Remainder of the low `bits` bits of `data` divided by [`POLY`].
///
/// `bits` is clamped to 32.
pub fn crc6(data: u32, bits: u32) -> u8 {
    let mut crc: u8 = 0;

    for i in (0..bits.min(32)).rev() {
        let bit = ((data >> i) & 1) as u8;
        let feedback = ((crc >> (WIDTH - 1)) & 1) ^ bit;
        crc = (crc << 1) & MASK;
        if feedback != 0 {
            crc ^= POLY & MASK;
        }
    }

    crc
}

/// CRC as it appears on the wire (inverted remainder).
#[inline]
pub fn crc6_inverted(data: u32, bits: u32) -> u8 {
    !crc6(data, bits) & MASK
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_data_has_zero_remainder() {
        assert_eq!(crc6(0, 19), 0);
        assert_eq!(crc6_inverted(0, 19), 0x3F);
    }

    #[test]
    fn single_bit_reduces_by_polynomial() {
        // x^6 mod (x^6 + x + 1) = x + 1
        assert_eq!(crc6(1, 1), 0x03);
        // x^7 mod (x^6 + x + 1) = x^2 + x
        assert_eq!(crc6(0b10, 2), 0x06);
    }

    #[test]
    fn known_position_vectors() {
        // position 0x12345, error bits 0b11, 17-bit position
        assert_eq!(crc6((0x12345 << 2) | 0b11, 19), 0x32);
        assert_eq!(crc6_inverted((0x12345 << 2) | 0b11, 19), 0x0D);
        // position 0x1ABC, error bits 0b11, 13-bit position
        assert_eq!(crc6((0x1ABC << 2) | 0b11, 15), 0x35);
        // all-ones payload
        assert_eq!(crc6((0x1FFFF << 2) | 0b11, 19), 0x1F);
    }

    #[test]
    fn leading_zero_bits_do_not_change_remainder() {
        let data = (0x0ABC << 2) | 0b01;
        assert_eq!(crc6(data, 15), crc6(data, 19));
    }
}
