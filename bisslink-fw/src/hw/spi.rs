// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! SPI4 register shim for the encoder link.
//!
//! - `EncoderSpi` owns an enabled HAL SPI4 instance (8-bit words) and exposes its status and data
//!   registers through `bisslink::hw::SpiRegisters`.
//! - `EncoderSelect` drives the encoder's active-low chip-select line.
//!
//! STM32 status flags map onto the link's register model as:
//!
//! | STM32 SR | link status |
//! | -------- | ----------- |
//! | `TXE` clear | `BUFFULL` |
//! | `RXNE`   | `INT` (transfer complete) |
//! | `OVR`    | `OVERRUN` |

use core::ptr;

use bisslink::drivers::FrameSelect;
use bisslink::hw::regs::{sts, Status, TX_SHIFT};
use bisslink::hw::SpiRegisters;

use stm32f7xx_hal::{
    gpio::{self, Output, PushPull},
    pac,
    spi::{Enabled, Spi},
};

/// Enabled SPI4 with register-level access for the polled link.
pub struct EncoderSpi<PINS> {
    _spi: Spi<pac::SPI4, PINS, Enabled<u8>>,
}

impl<PINS> EncoderSpi<PINS> {
    pub fn new(spi: Spi<pac::SPI4, PINS, Enabled<u8>>) -> Self {
        Self { _spi: spi }
    }

    #[inline]
    fn regs(&self) -> &pac::spi1::RegisterBlock {
        // SAFETY: the enabled HAL instance is owned by `self`, so nothing else drives SPI4.
        unsafe { &*pac::SPI4::ptr() }
    }
}

impl<PINS> SpiRegisters for EncoderSpi<PINS> {
    fn status(&self) -> Status {
        let sr = self.regs().sr.read();

        let mut raw = 0;
        if sr.txe().bit_is_clear() {
            raw |= sts::BUFFULL_FLAG;
        }
        if sr.rxne().bit_is_set() {
            raw |= sts::INT_FLAG;
        }
        if sr.ovr().bit_is_set() {
            raw |= sts::OVERRUN_FLAG;
        }

        Status::from_raw(raw)
    }

    fn write_tx(&mut self, word: u16) {
        let byte = (word >> TX_SHIFT) as u8;
        // 8-bit access, a 16-bit write would queue two frames (data packing).
        unsafe { ptr::write_volatile(&self.regs().dr as *const _ as *mut u8, byte) }
    }

    fn read_rx(&mut self) -> u16 {
        unsafe { ptr::read_volatile(&self.regs().dr as *const _ as *const u8) as u16 }
    }

    fn clear_flags(&mut self, mask: u16) {
        // TXE is hardware-managed. OVR clears on a DR read followed by an SR read; the RX FIFO
        // is drained first so no stale byte reaches the next exchange.
        if mask & sts::OVERRUN_FLAG != 0 {
            while self.regs().sr.read().rxne().bit_is_set() {
                let _ = self.read_rx();
            }
            let _ = self.regs().sr.read();
        }
    }
}

/// Encoder chip-select, active-low.
pub struct EncoderSelect<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> EncoderSelect<P, N> {
    pub fn new(pin: gpio::Pin<P, N, Output<PushPull>>) -> Self {
        Self { pin }
    }
}

impl<const P: char, const N: u8> FrameSelect for EncoderSelect<P, N> {
    #[inline]
    fn select(&mut self) {
        self.pin.set_low();
    }

    #[inline]
    fn deselect(&mut self) {
        self.pin.set_high();
    }
}
