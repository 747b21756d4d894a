// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Frame decoding properties.

use bisslink::protocol::{decode, DecodedSample, FrameFormat, RawFrame};
use bisslink::Error;

#[test]
fn all_zero_frame() {
    let s = RawFrame::new([0x00; 4]).decode();
    assert_eq!(
        s,
        DecodedSample {
            position: 0,
            error_bits: 0,
            crc: 0
        }
    );
}

#[test]
fn all_ones_frame_saturates_every_field() {
    let s = RawFrame::new([0xFF; 4]).decode();
    assert_eq!(s.position, 0x1FFFF);
    assert_eq!(s.error_bits, 0b11);
    assert_eq!(s.crc, 0x3F);

    let s = decode(RawFrame::new([0xFF; 4]), FrameFormat::new(13));
    assert_eq!(s.position, 0x1FFF);
}

#[test]
fn decode_is_pure() {
    let frames = [
        [0x00, 0x00, 0x00, 0x00],
        [0x48, 0xD1, 0x73, 0x40],
        [0xC3, 0x5A, 0xA5, 0x3C],
        [0xFF, 0xFF, 0xFF, 0xFF],
    ];
    for bytes in frames {
        let frame = RawFrame::from(bytes);
        assert_eq!(frame.decode(), frame.decode());
    }
}

#[test]
fn pack_then_decode_recovers_fields() {
    for bits in [13u8, 17] {
        let format = FrameFormat::new(bits);
        for &(position, error_bits, crc) in &[
            (0u32, 0u8, 0u8),
            (1, 0b01, 0x2A),
            (format.position_mask(), 0b11, 0x3F),
            (0x0F0F & format.position_mask(), 0b10, 0x15),
        ] {
            let sample = DecodedSample {
                position,
                error_bits,
                crc,
            };
            let frame = RawFrame::pack(&sample, format);
            assert_eq!(decode(frame, format), sample);
        }
    }
}

#[test]
fn packed_frame_matches_encoder_capture() {
    let sample = DecodedSample::with_valid_crc(0x12345, 0b11, FrameFormat::default());
    assert_eq!(sample.crc, 0x0D);
    assert_eq!(
        RawFrame::pack(&sample, FrameFormat::default()).bytes(),
        [0x48, 0xD1, 0x73, 0x40]
    );

    let narrow = FrameFormat::new(13);
    let sample = DecodedSample::with_valid_crc(0x1ABC, 0b11, narrow);
    assert_eq!(sample.crc, 0x0A);
    assert_eq!(
        RawFrame::pack(&sample, narrow).bytes(),
        [0x06, 0xAF, 0x32, 0x80]
    );
}

#[test]
fn start_and_stop_bits_are_ignored() {
    let base = RawFrame::new([0x48, 0xD1, 0x73, 0x40]).decode();
    let noisy = RawFrame::new([0xC8, 0xD1, 0x73, 0x7F]).decode();
    assert_eq!(base, noisy);
}

#[test]
fn verify_detects_every_single_bit_flip() {
    let format = FrameFormat::default();
    let good = RawFrame::new([0x48, 0xD1, 0x73, 0x40]);
    assert!(good.decode().verify(format).is_ok());

    // Position, error and CRC fields occupy bits 30..6.
    for bit in 6..31 {
        let word = good.word() ^ (1 << bit);
        let s = RawFrame::new(word.to_be_bytes()).decode();
        match s.verify(format) {
            Err(Error::CrcMismatch { expected, received }) => {
                assert_ne!(expected, received);
                assert_eq!(received, s.crc);
            }
            other => panic!("bit {} flip not detected: {:?}", bit, other),
        }
    }
}

#[test]
fn idle_line_fails_crc() {
    // A disconnected encoder reads back all zeros; the inverted CRC of a zero payload is 0x3F.
    let s = RawFrame::new([0x00; 4]).decode();
    assert_eq!(
        s.verify(FrameFormat::default()),
        Err(Error::CrcMismatch {
            expected: 0x3F,
            received: 0x00
        })
    );
}

#[test]
fn display_is_readable() {
    let s = DecodedSample {
        position: 74565,
        error_bits: 0b11,
        crc: 0x0D,
    };
    assert_eq!(s.to_string(), "pos=74565 err=11 crc=0x0D");
    assert_eq!(
        Error::CrcMismatch {
            expected: 0x01,
            received: 0x0D
        }
        .to_string(),
        "CRC mismatch: expected 0x01, received 0x0D"
    );
}
