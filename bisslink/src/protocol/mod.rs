// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! BiSS/SSI frame handling: raw capture layout, field extraction and CRC.

pub mod crc;
pub mod frame;

pub use frame::{decode, DecodedSample, FrameFormat, RawFrame, FRAME_LEN};
