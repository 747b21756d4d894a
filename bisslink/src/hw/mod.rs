// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Peripheral Layer
//!
//! - [`regs`] - typed view of the SPI peripheral registers the transport needs.
//! - [`wait`] - bounded busy-wait helper for peripheral status flags.
//! - [`spi`] - polled full-duplex byte transport.

pub mod regs;
pub mod spi;
pub mod wait;

pub use regs::{SpiRegisters, Status};
pub use spi::{ByteExchange, LinkConfig, SpiLink};
pub use wait::{WaitBound, WaitStage};
