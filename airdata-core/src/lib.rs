//! Signal conditioning for I2C airspeed sensors
//!
//! Turns raw pressure/temperature register words into a stable airspeed
//! estimate usable by a flight controller.
//!
//! Key constraints:
//! - `no_std` capable, no heap allocation in the sampling path
//! - Deterministic per-sample cost for 100 Hz control loops
//! - Register layouts bit-exact to the MS4525DO / SSC datasheets
//!
//! The pipeline, stage by stage:
//!
//! ```text
//! raw word → status gate → decoder → filter cascade → airspeed
//!            (2-bit field)  (hPa/°C)  (caller-composed)  (Bernoulli)
//! ```
//!
//! ```no_run
//! use airdata_core::{AirspeedSensor, SensorCalibration};
//! use airdata_core::calibration::{OutputType, PsiRange};
//! use airdata_core::filters::{ScalarKalman, SmoothDeadband};
//! # struct Bus;
//! # impl airdata_core::SensorBus for Bus {
//! #     fn read(&mut self, _b: &mut [u8]) -> airdata_core::AirdataResult<()> { Ok(()) }
//! # }
//! # let bus = Bus;
//!
//! let cal = SensorCalibration::ms4525(PsiRange::Psi1, OutputType::TypeA);
//! let mut sensor = AirspeedSensor::new(bus, "MS4525DO", cal);
//! sensor.zero_pressure_sensor()?;
//!
//! let mut kalman = ScalarKalman::new(10.0, 100_000.0, 1.0, 0.0);
//! let mut deadband = SmoothDeadband::new(0.05, 0.5);
//!
//! // Per control-loop iteration:
//! let pressure = sensor.read_pressure()?.value_or_zero();
//! let smoothed = deadband.update(kalman.update(pressure));
//! let knots = airdata_core::airspeed::airspeed_knots(smoothed);
//! # let _ = knots;
//! # Ok::<(), airdata_core::AirdataError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod airspeed;
pub mod calibration;
pub mod constants;
pub mod decode;
pub mod errors;
pub mod events;
pub mod filters;
pub mod sample;
pub mod sensor;
pub mod time;

// Public API
pub use calibration::{CalibrationBlob, CalibrationStore, SensorCalibration};
pub use decode::Measurement;
pub use errors::{AirdataError, AirdataResult};
pub use sample::{RawSample, Status};
pub use sensor::{AirspeedSensor, SensorBus};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
