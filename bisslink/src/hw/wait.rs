// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Bounded busy-waits.
//!
//! Peripheral readiness is expressed as an `nb` operation: `WouldBlock` while the flag is not yet
//! set, `Ok` once it is. [`poll_until`] spins on such an operation until it completes, fails, or
//! its [`WaitBound`] runs out.

use core::fmt;

use crate::error::{Error, Result};

/// How long a busy-wait may spin.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitBound {
    /// Spin until the condition holds. A stuck peripheral hangs the caller.
    Unbounded,
    /// Give up after this many polls. At least one poll is always made.
    Polls(u32),
}

/// Which wait of a byte exchange is in progress.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WaitStage {
    /// Waiting for room in the transmit buffer.
    TxReady,
    /// Waiting for the received character.
    TransferComplete,
}

impl fmt::Display for WaitStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WaitStage::TxReady => f.write_str("TX buffer"),
            WaitStage::TransferComplete => f.write_str("transfer complete"),
        }
    }
}

/// Poll `op` until it yields a value or an error.
///
/// Returns `Error::TransportTimeout(stage)` if `bound` is exhausted first.
pub fn poll_until<T, F>(bound: WaitBound, stage: WaitStage, mut op: F) -> Result<T>
where
    F: FnMut() -> nb::Result<T, Error>,
{
    let mut remaining = match bound {
        WaitBound::Unbounded => None,
        WaitBound::Polls(n) => Some(n.max(1)),
    };

    loop {
        match op() {
            Ok(v) => return Ok(v),
            Err(nb::Error::Other(e)) => return Err(e),
            Err(nb::Error::WouldBlock) => {}
        }

        if let Some(n) = remaining.as_mut() {
            *n -= 1;
            if *n == 0 {
                return Err(Error::TransportTimeout(stage));
            }
        }

        core::hint::spin_loop();
    }
}
