// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # bisslink
//!
//! Polled SPI transport and frame decoding for BiSS/SSI-style absolute encoders, written in Rust
//! for `no_std` targets.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`hw`] | SPI peripheral register model, bounded busy-waits and the byte transport |
//! | [`protocol`] | Raw frame layout, field extraction and the BiSS CRC-6 |
//! | [`drivers`] | Device-level drivers built on the transport (BiSS encoder) |
//!
//! ## Getting Started
//!
//! Implement [`hw::SpiRegisters`] for your peripheral (or use a mock off-target), then:
//!
//! ```ignore
//! let mut link = SpiLink::new(regs, LinkConfig::default());
//! link.init();
//!
//! let mut encoder = BissEncoder::new((), FrameFormat::default());
//! let sample = encoder.read_checked(&mut link)?;
//! ```
//!
//! Run the host tests:
//!
//! ```bash
//! cargo test -p bisslink
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//! See the `LICENSE` file in the repository root for full terms.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod drivers;
pub mod error;
pub mod hw;
pub mod protocol;

pub use error::{Error, Result};
