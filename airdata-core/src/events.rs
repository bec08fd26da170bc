//! Sensor Descriptor and Event Records
//!
//! ## Overview
//!
//! The host framework that consumes this crate publishes sensor readings as
//! `{kind, value, timestamp}` records and advertises each channel with a
//! static descriptor. This module defines both record types; the transport
//! (CAN frames, telemetry bus, log files) is the host's concern.
//!
//! The pressure and temperature facets of one physical device are plain
//! values created eagerly with the driver - there is no lazy allocation and
//! no shared ownership, since each device has exactly one of each.
//!
//! Records are small `Copy` types so they can be queued by value on embedded
//! targets.

use crate::time::Timestamp;

/// Which physical quantity a channel reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SensorKind {
    /// Differential or gauge pressure, hPa
    Pressure,
    /// Die temperature, °C
    Temperature,
}

/// Static description of one sensor channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorInfo {
    /// Device name, e.g. `"MS4525DO"`
    pub name: &'static str,
    /// Quantity this channel reports
    pub kind: SensorKind,
    /// Smallest reportable value (hPa or °C)
    pub min_value: f32,
    /// Largest reportable value (hPa or °C)
    pub max_value: f32,
    /// Smallest distinguishable step (one raw count)
    pub resolution: f32,
    /// Minimum interval between conversions, microseconds
    pub min_delay_us: u32,
}

/// One published reading
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorEvent {
    /// Quantity reported
    pub kind: SensorKind,
    /// Decoded value (hPa or °C)
    pub value: f32,
    /// True when the sensor re-served its previous conversion
    pub stale: bool,
    /// When the reading was taken
    pub timestamp: Timestamp,
}
