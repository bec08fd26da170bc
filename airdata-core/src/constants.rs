//! Physical and Register-Layout Constants for Airdata
//!
//! This module defines the physics constants and datasheet values used
//! throughout the signal-conditioning pipeline. All values are based on the
//! International Standard Atmosphere and the sensor datasheets.

// ===== ATMOSPHERE =====

/// Air density at sea level under ISA conditions (kg/m³).
///
/// Used in the incompressible Bernoulli airspeed conversion. Not compensated
/// for altitude or temperature, so indicated airspeed drifts from true
/// airspeed as density drops.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_AIR_DENSITY: f32 = 1.225;

/// Standard atmospheric pressure at sea level (hPa).
///
/// Default QNH reference for pressure-altitude calculations.
///
/// Source: International Standard Atmosphere (ISA)
pub const SEA_LEVEL_PRESSURE_HPA: f32 = 1013.25;

/// Barometric altitude scale constant (m).
///
/// `altitude = 44330 * (1 - (p/p0)^0.1903)` is the tropospheric barometric
/// formula solved for altitude; valid below ~11 km.
pub const BAROMETRIC_SCALE_M: f32 = 44330.0;

/// Exponent of the barometric altitude formula (dimensionless).
///
/// Equals `R*L/(g*M)` for dry air with the standard lapse rate.
pub const BAROMETRIC_EXPONENT: f32 = 0.1903;

// ===== UNIT CONVERSIONS =====

/// Hectopascals to pascals
pub const HPA_TO_PA: f32 = 100.0;

/// Metres per second to knots
pub const MPS_TO_KNOTS: f32 = 1.94384;

/// Metres to feet
pub const M_TO_FT: f32 = 3.28084;

/// Pounds per square inch to hectopascals.
///
/// The MS4525DO family specifies its full-scale range in psi.
pub const PSI_TO_HPA: f32 = 68.9476;

// ===== SENSOR REGISTER SCALE =====

/// Mid-scale raw count of a 14-bit differential sensor.
///
/// A differential sensor at zero airflow should read exactly mid-scale;
/// the zero calibrator corrects the measured average toward this value.
pub const MID_SCALE_COUNT: i32 = 0x2000;

// ===== ZERO CALIBRATION =====

/// Usable samples averaged by the zero calibrator
pub const ZERO_CAL_SAMPLES: usize = 10;

/// Default raw-read attempt budget for zero calibration.
///
/// The reference implementation spun forever when the sensor returned only
/// zero counts; the budget converts that hang into a reported timeout.
pub const ZERO_CAL_MAX_ATTEMPTS: u32 = 100;

// ===== FILTER DEFAULTS =====

/// Default update interval between exact re-summations of the float
/// rolling average.
///
/// Incremental add/subtract accumulates floating-point round-off; a full
/// resum every N updates bounds the drift at O(N) cost.
pub const ROLLING_RESYNC_INTERVAL: u32 = 256;
