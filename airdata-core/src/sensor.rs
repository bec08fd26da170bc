//! Airspeed Sensor Driver: Bus Reads, Accessors, Zero Calibration
//!
//! ## Overview
//!
//! [`AirspeedSensor`] is the driver around one physical I2C pressure
//! transducer. It is generic over [`SensorBus`], the one-method contract the
//! core needs from the host's I2C stack: "fill this buffer from the device or
//! fail". Bus mechanics - addressing, clock stretching, retries at the
//! transaction level - stay with the host.
//!
//! The driver owns the [`SensorCalibration`] for its device and hands the
//! decoders a read-only reference per read. Pressure and temperature are
//! facets of the same device, exposed as pull accessors plus eagerly-built
//! descriptor records; there is no lazily-allocated sub-sensor object.
//!
//! ## Zero Calibration
//!
//! A differential sensor at rest should read mid-scale (0x2000 counts).
//! [`AirspeedSensor::zero_pressure_sensor`] measures the actual resting
//! average over 10 usable samples and stores the correction. Two caller
//! obligations, neither of which the driver can verify:
//!
//! - the probe must see zero differential pressure (no airflow) while the
//!   routine runs; it will happily calibrate away a real headwind
//! - the sensor must be producing conversions; if it only returns errors or
//!   zero counts the routine gives up after its attempt budget and reports
//!   [`AirdataError::CalibrationTimeout`] rather than spinning forever
//!
//! ## Concurrency
//!
//! Single-threaded and non-reentrant, like the rest of the crate: one driver
//! instance per device, called from one control-loop task.

use heapless::Vec;

use crate::airspeed::{airspeed_knots, pressure_to_altitude_ft};
use crate::calibration::{CalibrationStore, SensorCalibration};
use crate::constants::{MID_SCALE_COUNT, ZERO_CAL_MAX_ATTEMPTS, ZERO_CAL_SAMPLES};
use crate::decode::{decode_pressure, decode_temperature, Measurement};
use crate::errors::{AirdataError, AirdataResult};
use crate::events::{SensorEvent, SensorInfo, SensorKind};
use crate::sample::{RawSample, Status};
use crate::time::Timestamp;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Contract the driver needs from the host's I2C stack.
///
/// Implementations fill `buffer` with `buffer.len()` bytes read from the
/// device, most significant byte first (the sensors stream registers
/// big-endian). A failed transaction must return [`AirdataError::BusRead`],
/// never fabricate zeroed bytes - an all-zero word is a legitimate reading.
pub trait SensorBus {
    /// Read exactly `buffer.len()` bytes from the device
    fn read(&mut self, buffer: &mut [u8]) -> AirdataResult<()>;
}

/// Driver for one I2C airspeed transducer
#[derive(Debug)]
pub struct AirspeedSensor<B: SensorBus> {
    bus: B,
    name: &'static str,
    calibration: SensorCalibration,
    cal_max_attempts: u32,
}

impl<B: SensorBus> AirspeedSensor<B> {
    /// Driver over `bus` with a family calibration from
    /// [`SensorCalibration::ms4525`] or [`SensorCalibration::ssc`].
    pub fn new(bus: B, name: &'static str, calibration: SensorCalibration) -> Self {
        Self {
            bus,
            name,
            calibration,
            cal_max_attempts: ZERO_CAL_MAX_ATTEMPTS,
        }
    }

    /// Override the zero-calibration attempt budget
    pub fn with_cal_attempts(mut self, attempts: u32) -> Self {
        self.cal_max_attempts = attempts;
        self
    }

    /// Current calibration (read-only; decoders receive this reference)
    pub fn calibration(&self) -> &SensorCalibration {
        &self.calibration
    }

    /// Replace the calibration wholesale (e.g. after a range change)
    pub fn set_calibration(&mut self, calibration: SensorCalibration) {
        self.calibration = calibration;
    }

    /// Restore calibration from the host's persistent store.
    ///
    /// Returns `true` when a stored image was found and applied.
    pub fn restore_calibration<S: CalibrationStore>(&mut self, store: &mut S) -> AirdataResult<bool> {
        match store.load()? {
            Some(blob) => {
                self.calibration = SensorCalibration::from_blob(&blob);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Persist the current calibration to the host's store
    pub fn persist_calibration<S: CalibrationStore>(&self, store: &mut S) -> AirdataResult<()> {
        store.save(&self.calibration.to_blob())
    }

    // 16-bit register word, big-endian off the wire
    fn read_word(&mut self) -> AirdataResult<u16> {
        let mut buffer = [0u8; 2];
        self.bus.read(&mut buffer)?;
        Ok(u16::from_be_bytes(buffer))
    }

    // 32-bit register longword, big-endian off the wire
    fn read_long(&mut self) -> AirdataResult<u32> {
        let mut buffer = [0u8; 4];
        self.bus.read(&mut buffer)?;
        Ok(u32::from_be_bytes(buffer))
    }

    /// Raw 14-bit pressure count, accepting Normal status only.
    ///
    /// Stricter than [`read_pressure`](Self::read_pressure): the zero
    /// calibrator must not average stale conversions, since a repeated stale
    /// word would bias the offset toward one instant's reading.
    pub fn read_raw_pressure_count(&mut self) -> AirdataResult<u16> {
        let raw = RawSample::Word(self.read_word()?);
        match raw.status() {
            Status::Normal => Ok(raw.count()),
            status => Err(AirdataError::InvalidStatus { status }),
        }
    }

    /// Differential (or gauge) pressure in hPa, status-gated and tagged
    pub fn read_pressure(&mut self) -> AirdataResult<Measurement> {
        let word = self.read_word()?;
        Ok(decode_pressure(word, &self.calibration))
    }

    /// Die temperature in °C, status-gated and tagged
    pub fn read_temperature(&mut self) -> AirdataResult<Measurement> {
        let long = self.read_long()?;
        Ok(decode_temperature(long, &self.calibration))
    }

    /// Indicated airspeed in knots from the current pressure reading.
    ///
    /// Rejected samples degrade to zero pressure (and therefore zero speed)
    /// rather than failing - the keep-flying contract for control loops.
    /// Bus failures still propagate.
    pub fn read_speed(&mut self) -> AirdataResult<f32> {
        let pressure_hpa = self.read_pressure()?.value_or_zero();
        Ok(airspeed_knots(pressure_hpa))
    }

    /// Pressure altitude in feet against a QNH reference (gauge sensors
    /// plumbed to static pressure)
    pub fn read_altitude_ft(&mut self, qnh_hpa: f32) -> AirdataResult<f32> {
        let pressure_hpa = self.read_pressure()?.value_or_zero();
        Ok(pressure_to_altitude_ft(pressure_hpa, qnh_hpa))
    }

    /// Measure and store the zero-pressure count offset.
    ///
    /// Averages [`ZERO_CAL_SAMPLES`] usable non-zero raw counts and stores
    /// `0x2000 - average` as the correction. Must be called with the probe at
    /// a known zero-airflow reference. Returns the new offset.
    ///
    /// Rejected samples (bad status, zero count, bus failure) are retried;
    /// when the attempt budget runs out the calibration is left untouched
    /// and [`AirdataError::CalibrationTimeout`] is returned.
    pub fn zero_pressure_sensor(&mut self) -> AirdataResult<i16> {
        let mut samples: Vec<u16, ZERO_CAL_SAMPLES> = Vec::new();
        let mut attempts = 0u32;

        while !samples.is_full() {
            if attempts >= self.cal_max_attempts {
                log_warn!(
                    "{}: zero calibration gave up after {} attempts ({} samples)",
                    self.name,
                    attempts,
                    samples.len()
                );
                return Err(AirdataError::CalibrationTimeout { attempts });
            }
            attempts += 1;

            match self.read_raw_pressure_count() {
                // A zero count is either a dead sensor or a failed read that
                // was reported as zeroed bytes; never average it in.
                Ok(0) => continue,
                Ok(count) => {
                    // Capacity equals the loop bound; push cannot fail
                    let _ = samples.push(count);
                }
                Err(AirdataError::BusRead) | Err(AirdataError::InvalidStatus { .. }) => continue,
                Err(e) => return Err(e),
            }
        }

        let sum: i32 = samples.iter().map(|&c| c as i32).sum();
        let average = sum / samples.len() as i32;
        let offset = (MID_SCALE_COUNT - average) as i16;

        self.calibration.zero_count_offset = offset;
        Ok(offset)
    }

    /// Descriptor for the pressure facet
    pub fn pressure_info(&self) -> SensorInfo {
        let cal = &self.calibration;
        SensorInfo {
            name: self.name,
            kind: SensorKind::Pressure,
            min_value: cal.p_min,
            max_value: cal.p_max,
            resolution: cal.p_range / (cal.max_count - cal.min_count) as f32,
            min_delay_us: 500,
        }
    }

    /// Descriptor for the temperature facet
    pub fn temperature_info(&self) -> SensorInfo {
        SensorInfo {
            name: self.name,
            kind: SensorKind::Temperature,
            min_value: -50.0,
            max_value: 150.0,
            resolution: 0.1,
            min_delay_us: 500,
        }
    }

    /// Read pressure and wrap it as a publishable event record.
    ///
    /// Rejected samples are an error here, not a zero: event consumers want
    /// validity, not a keep-flying default.
    pub fn pressure_event(&mut self, timestamp: Timestamp) -> AirdataResult<SensorEvent> {
        match self.read_pressure()? {
            Measurement::Valid { value, stale } => Ok(SensorEvent {
                kind: SensorKind::Pressure,
                value,
                stale,
                timestamp,
            }),
            Measurement::Invalid(status) => Err(AirdataError::InvalidStatus { status }),
        }
    }

    /// Read temperature and wrap it as a publishable event record
    pub fn temperature_event(&mut self, timestamp: Timestamp) -> AirdataResult<SensorEvent> {
        match self.read_temperature()? {
            Measurement::Valid { value, stale } => Ok(SensorEvent {
                kind: SensorKind::Temperature,
                value,
                stale,
                timestamp,
            }),
            Measurement::Invalid(status) => Err(AirdataError::InvalidStatus { status }),
        }
    }
}
