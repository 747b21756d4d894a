// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Device-Specific Drivers
//!
//! Drivers that sit above the `hw` transport and below the application polling loop.
//!
//! ## Existing drivers
//!
//! - [`biss`] – BiSS-C / SSI absolute encoder read over SPI

pub mod biss;

pub use biss::{BissEncoder, FrameSelect};
