//! Error Types for Signal-Conditioning Failures
//!
//! ## Design Philosophy
//!
//! The error system follows the same constraints as the rest of the crate:
//!
//! 1. **Small Size**: Each variant carries only inline scalar data since errors
//!    are returned from the sampling hot path every control-loop iteration.
//!
//! 2. **No Heap Allocation**: No `String`, no boxed sources. This keeps memory
//!    usage deterministic on flight hardware.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so they can be returned and
//!    stored without move-semantics friction.
//!
//! ## Error Categories
//!
//! ### Sample rejection
//! - `InvalidStatus`: the sensor flagged the register word as Error/Reserved.
//!   The count field may contain garbage and must not be decoded.
//!
//! ### Transport
//! - `BusRead`: the I2C transaction itself failed. Historically this was
//!   reported as an all-zero word, indistinguishable from a legitimate
//!   zero-differential reading; surfacing it as a distinct error removes
//!   that ambiguity.
//!
//! ### Calibration
//! - `CalibrationTimeout`: the zero-offset routine could not collect enough
//!   usable samples within its attempt budget. The original routine spun
//!   forever in this case.
//! - `StoreFailed`: the persistent calibration store rejected a load/save.
//!
//! ## Error Handling Strategy
//!
//! Decode and filter errors are local: the pull accessors degrade to a safe
//! zero (`Measurement::value_or_zero`) so the control loop keeps flying, while
//! the tagged API carries validity metadata so a supervisor can detect
//! persistent failure.

use thiserror_no_std::Error;

use crate::sample::Status;

/// Result type for signal-conditioning operations
pub type AirdataResult<T> = Result<T, AirdataError>;

/// Errors raised by decoding, bus transport, and calibration - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AirdataError {
    /// Register word carried an Error or Reserved status; count field unusable
    #[error("sample rejected: sensor status {status:?}")]
    InvalidStatus {
        /// The 2-bit status field that caused rejection
        status: Status,
    },

    /// I2C transaction failed before any bits were received
    #[error("bus read failed")]
    BusRead,

    /// Zero calibration exhausted its retry budget without 10 usable samples
    #[error("zero calibration timed out after {attempts} attempts")]
    CalibrationTimeout {
        /// Raw reads attempted before giving up
        attempts: u32,
    },

    /// Persistent calibration store could not complete a load or save
    #[error("calibration store operation failed")]
    StoreFailed,
}

#[cfg(feature = "defmt")]
impl defmt::Format for AirdataError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InvalidStatus { status } =>
                defmt::write!(fmt, "sample rejected: status {}", *status as u8),
            Self::BusRead =>
                defmt::write!(fmt, "bus read failed"),
            Self::CalibrationTimeout { attempts } =>
                defmt::write!(fmt, "zero calibration timed out after {} attempts", attempts),
            Self::StoreFailed =>
                defmt::write!(fmt, "calibration store failed"),
        }
    }
}
