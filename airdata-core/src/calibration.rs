//! Sensor Calibration: Range, Transfer Function, and Zero Offset
//!
//! ## Overview
//!
//! The sensors report a raw count over a fixed fraction of their 14-bit
//! output span. Turning a count into a pressure needs three datasheet-derived
//! parameters, all held here:
//!
//! - **Pressure span** (`p_min`, `p_max`): the physical range the device was
//!   ordered with. Differential devices are symmetric around zero; gauge
//!   devices start at zero.
//! - **Count window** (`min_count`, `max_count`): which fraction of the
//!   0..0x3FFF count range maps onto the pressure span. This is the vendor's
//!   "transfer function" or "output type".
//! - **Zero offset** (`zero_count_offset`): an additive correction measured
//!   at a known zero-airflow reference, cancelling sensor and plumbing bias.
//!
//! Decoders receive a shared reference to [`SensorCalibration`]; this is the
//! read-only snapshot boundary between the driver (which owns and mutates
//! calibration) and the pure decode math.
//!
//! ## Supported Families
//!
//! | family   | span                    | temperature divisor |
//! |----------|-------------------------|---------------------|
//! | MS4525DO | ±range, ordered in psi  | 2048                |
//! | SSC      | 0..range, ordered in bar| 2047                |
//!
//! The count-window constants below are kept bit-exact to the datasheets.
//!
//! ## Persistence
//!
//! [`CalibrationBlob`] is the flat, serializable image of a calibration that
//! the host round-trips through its EEPROM or settings store. The store
//! mechanics (wear levelling, addressing) are the host's concern; this module
//! only defines the contract via [`CalibrationStore`].

use crate::constants::PSI_TO_HPA;
use crate::errors::AirdataResult;

/// Full-scale range options for the MS4525DO differential family (psi)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PsiRange {
    /// ±1 psi
    Psi1 = 1,
    /// ±2 psi
    Psi2 = 2,
    /// ±5 psi
    Psi5 = 5,
    /// ±15 psi
    Psi15 = 15,
    /// ±30 psi
    Psi30 = 30,
    /// ±50 psi
    Psi50 = 50,
    /// ±100 psi
    Psi100 = 100,
    /// ±150 psi
    Psi150 = 150,
}

/// Full-scale range options for the SSC gauge family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarRange {
    /// 1.0 bar (1000 hPa)
    Bar1_0 = 10,
    /// 1.6 bar (1600 hPa)
    Bar1_6 = 16,
    /// 2.5 bar (2500 hPa)
    Bar2_5 = 25,
    /// 4.0 bar (4000 hPa)
    Bar4_0 = 40,
    /// 6.0 bar (6000 hPa)
    Bar6_0 = 60,
    /// 10.0 bar (10000 hPa)
    Bar10_0 = 100,
}

/// MS4525DO output types: which fraction of the count range is in spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputType {
    /// 10% to 90% of full-scale counts
    TypeA,
    /// 5% to 95% of full-scale counts
    TypeB,
}

/// SSC transfer functions: which fraction of the count range is in spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferFunction {
    /// 10% to 90% of full-scale counts
    A,
    /// 5% to 95% of full-scale counts
    B,
    /// 5% to 85% of full-scale counts
    C,
    /// 4% to 94% of full-scale counts
    F,
}

/// Affine map from the 11-bit temperature count to degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TemperatureScale {
    /// `count * 200/2048 - 50` (MS4525DO family)
    Counts2048,
    /// `count * 200/2047 - 50` (SSC family)
    Counts2047,
}

impl TemperatureScale {
    /// Convert an 11-bit temperature count to °C
    pub fn to_celsius(self, count: u16) -> f32 {
        let divisor = match self {
            TemperatureScale::Counts2048 => 2048.0,
            TemperatureScale::Counts2047 => 2047.0,
        };
        count as f32 * 200.0 / divisor - 50.0
    }
}

/// Scaling parameters for one physical sensor.
///
/// Constructed once at configuration time from the family constructors,
/// mutated only by the range/transfer-function setters and by the zero
/// calibrator. Lives as long as the owning [`AirspeedSensor`] handle.
///
/// Invariant: `max_count > min_count` for every reachable configuration, so
/// the decode division never sees a zero span.
///
/// [`AirspeedSensor`]: crate::sensor::AirspeedSensor
#[derive(Debug, Clone, PartialEq)]
pub struct SensorCalibration {
    /// Count at the bottom of the in-spec window
    pub min_count: i16,
    /// Count at the top of the in-spec window
    pub max_count: i16,
    /// Pressure at `min_count` (hPa)
    pub p_min: f32,
    /// Pressure at `max_count` (hPa)
    pub p_max: f32,
    /// `p_max - p_min` (hPa), kept precomputed for the decode hot path
    pub p_range: f32,
    /// Additive raw-count correction from the zero calibrator
    pub zero_count_offset: i16,
    /// Temperature count scaling for this family
    pub temperature_scale: TemperatureScale,
}

impl SensorCalibration {
    /// Calibration for an MS4525DO differential sensor.
    ///
    /// The span is symmetric: ±`range` psi converted to hPa.
    pub fn ms4525(range: PsiRange, output: OutputType) -> Self {
        let p_max = range as i32 as f32 * PSI_TO_HPA;
        let (min_count, max_count) = match output {
            OutputType::TypeA => (0x0666, 0x3998), // 10% / 90% of 0x3FFF
            OutputType::TypeB => (0x0333, 0x3CCB), // 5% / 95% of 0x3FFF
        };
        Self {
            min_count,
            max_count,
            p_min: -p_max,
            p_max,
            p_range: 2.0 * p_max,
            zero_count_offset: 0,
            temperature_scale: TemperatureScale::Counts2048,
        }
    }

    /// Calibration for an SSC gauge sensor.
    ///
    /// The span runs from 0 to the ordered range in hPa.
    pub fn ssc(range: BarRange, tf: TransferFunction) -> Self {
        let p_max = range as i32 as f32 * 100.0;
        let (min_count, max_count) = match tf {
            TransferFunction::A => (0x0666, 0x399A), // 10% / 90% of 0x4000
            TransferFunction::B => (0x0333, 0x3CCD), // 5% / 95% of 0x4000
            TransferFunction::C => (0x0333, 0x3666), // 5% / 85% of 0x4000
            TransferFunction::F => (0x028F, 0x3C28), // 4% / 94% of 0x4000
        };
        Self {
            min_count,
            max_count,
            p_min: 0.0,
            p_max,
            p_range: p_max,
            zero_count_offset: 0,
            temperature_scale: TemperatureScale::Counts2047,
        }
    }

    /// Reconfigure the pressure span, keeping the count window and offset.
    pub fn set_pressure_span(&mut self, p_min: f32, p_max: f32) {
        self.p_min = p_min;
        self.p_max = p_max;
        self.p_range = p_max - p_min;
    }

    /// Reconfigure the in-spec count window, keeping the span and offset.
    pub fn set_count_window(&mut self, min_count: i16, max_count: i16) {
        self.min_count = min_count;
        self.max_count = max_count;
    }

    /// Flat persistence image of this calibration
    pub fn to_blob(&self) -> CalibrationBlob {
        CalibrationBlob {
            min_count: self.min_count,
            max_count: self.max_count,
            p_min: self.p_min,
            p_max: self.p_max,
            zero_count_offset: self.zero_count_offset,
            temperature_scale: self.temperature_scale,
        }
    }

    /// Restore a calibration from a persisted image
    pub fn from_blob(blob: &CalibrationBlob) -> Self {
        Self {
            min_count: blob.min_count,
            max_count: blob.max_count,
            p_min: blob.p_min,
            p_max: blob.p_max,
            p_range: blob.p_max - blob.p_min,
            zero_count_offset: blob.zero_count_offset,
            temperature_scale: blob.temperature_scale,
        }
    }
}

/// Serializable calibration image for the host's persistent store
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalibrationBlob {
    /// Count at the bottom of the in-spec window
    pub min_count: i16,
    /// Count at the top of the in-spec window
    pub max_count: i16,
    /// Pressure at `min_count` (hPa)
    pub p_min: f32,
    /// Pressure at `max_count` (hPa)
    pub p_max: f32,
    /// Additive raw-count correction
    pub zero_count_offset: i16,
    /// Temperature count scaling
    pub temperature_scale: TemperatureScale,
}

/// Contract the core needs from the host's persistent calibration store.
///
/// The core only requires that a [`CalibrationBlob`] round-trips; EEPROM
/// layout, checksumming, and wear are the implementer's concern.
pub trait CalibrationStore {
    /// Load the stored calibration, `Ok(None)` when nothing was saved yet
    fn load(&mut self) -> AirdataResult<Option<CalibrationBlob>>;
    /// Persist a calibration image
    fn save(&mut self, blob: &CalibrationBlob) -> AirdataResult<()>;
}

/// In-memory store, useful for tests and hosts without persistence
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blob: Option<CalibrationBlob>,
}

impl MemoryStore {
    /// Empty store
    pub const fn new() -> Self {
        Self { blob: None }
    }
}

impl CalibrationStore for MemoryStore {
    fn load(&mut self) -> AirdataResult<Option<CalibrationBlob>> {
        Ok(self.blob)
    }

    fn save(&mut self, blob: &CalibrationBlob) -> AirdataResult<()> {
        self.blob = Some(*blob);
        Ok(())
    }
}
