//! Status-Gated Decoding of Raw Register Words
//!
//! ## Overview
//!
//! Decoders turn validated register words into physical units:
//!
//! - Pressure: linear rescale of the 14-bit count (offset-corrected by the
//!   calibrated zero offset) from the in-spec count window onto the
//!   configured pressure span, in hPa.
//! - Temperature: affine map of the 11-bit count onto -50..150 °C.
//!
//! Both are pure functions of the raw bits and a read-only calibration
//! reference.
//!
//! ## Tagged Results
//!
//! The reference implementation returned a literal `0.0` for rejected
//! samples, which is indistinguishable from a true zero-differential reading.
//! Decoders here return a tagged [`Measurement`] instead; control loops that
//! want the legacy keep-flying degradation use
//! [`Measurement::value_or_zero`], which reproduces the old contract exactly.
//!
//! Stale samples decode identically to Normal ones (reference behavior); the
//! `stale` flag is carried so callers can apply their own confidence policy.

use crate::calibration::SensorCalibration;
use crate::sample::{RawSample, Status};

/// Outcome of decoding one register word
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Measurement {
    /// Status was Normal or Stale; the value is usable
    Valid {
        /// Decoded physical value (hPa or °C)
        value: f32,
        /// True when the sensor re-served its previous conversion
        stale: bool,
    },
    /// Status was Error or Reserved; the count field was not decoded
    Invalid(Status),
}

impl Measurement {
    /// The decoded value, or `0.0` when the sample was rejected.
    ///
    /// This is the legacy degradation: a zero feeds harmlessly through the
    /// downstream filters. Callers that must distinguish a rejected sample
    /// from a true zero match on the variant instead.
    pub fn value_or_zero(self) -> f32 {
        match self {
            Measurement::Valid { value, .. } => value,
            Measurement::Invalid(_) => 0.0,
        }
    }

    /// Whether the sample passed status gating
    pub fn is_valid(self) -> bool {
        matches!(self, Measurement::Valid { .. })
    }

    /// The decoded value, `None` when rejected
    pub fn value(self) -> Option<f32> {
        match self {
            Measurement::Valid { value, .. } => Some(value),
            Measurement::Invalid(_) => None,
        }
    }
}

/// Decode a 16-bit pressure register word to hPa.
///
/// The 14-bit count is corrected by the calibrated zero offset, then linearly
/// rescaled from the in-spec count window onto the configured span:
///
/// ```text
/// p = p_range * (count - min_count) / (max_count - min_count) + p_min
/// ```
///
/// The divisor is positive for every reachable calibration.
pub fn decode_pressure(word: u16, cal: &SensorCalibration) -> Measurement {
    let raw = RawSample::Word(word);
    let status = raw.status();
    if !status.is_usable() {
        return Measurement::Invalid(status);
    }

    let count = raw.count() as i16 + cal.zero_count_offset;
    let value = cal.p_range * ((count - cal.min_count) as f32
        / (cal.max_count - cal.min_count) as f32)
        + cal.p_min;

    Measurement::Valid {
        value,
        stale: status.is_stale(),
    }
}

/// Decode a 32-bit register longword to °C.
///
/// The 11-bit temperature count sits at bits 5-15; the affine scale (2048 or
/// 2047 divisor) is a per-family property of the calibration.
pub fn decode_temperature(long: u32, cal: &SensorCalibration) -> Measurement {
    let raw = RawSample::Long(long);
    let status = raw.status();
    if !status.is_usable() {
        return Measurement::Invalid(status);
    }

    Measurement::Valid {
        value: cal.temperature_scale.to_celsius(raw.count()),
        stale: status.is_stale(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calibration::{OutputType, PsiRange, SensorCalibration};

    fn cal() -> SensorCalibration {
        SensorCalibration::ms4525(PsiRange::Psi1, OutputType::TypeA)
    }

    #[test]
    fn error_and_reserved_rejected_regardless_of_count() {
        let cal = cal();
        for count in [0u16, 0x1234, 0x2000, 0x3FFF] {
            let error_word = (0b01 << 14) | count;
            let reserved_word = (0b11 << 14) | count;
            assert_eq!(
                decode_pressure(error_word, &cal),
                Measurement::Invalid(Status::Error)
            );
            assert_eq!(
                decode_pressure(reserved_word, &cal),
                Measurement::Invalid(Status::Reserved)
            );
            // Legacy contract: rejected samples read as exactly zero
            assert_eq!(decode_pressure(error_word, &cal).value_or_zero(), 0.0);
            assert_eq!(decode_pressure(reserved_word, &cal).value_or_zero(), 0.0);
        }
    }

    #[test]
    fn linear_scaling_endpoints_and_midpoint() {
        let cal = cal();

        // count == min_count decodes to p_min
        let p = decode_pressure(cal.min_count as u16, &cal).value_or_zero();
        assert!((p - cal.p_min).abs() < 1e-3);

        // count == max_count decodes to p_max
        let p = decode_pressure(cal.max_count as u16, &cal).value_or_zero();
        assert!((p - cal.p_max).abs() < 1e-3);

        // midpoint count decodes to the midpoint pressure
        let mid = ((cal.min_count as i32 + cal.max_count as i32) / 2) as u16;
        let p = decode_pressure(mid, &cal).value_or_zero();
        let expected = (cal.p_min + cal.p_max) / 2.0;
        // midpoint count truncates half a count; allow one count of slack
        let count_lsb = cal.p_range / (cal.max_count - cal.min_count) as f32;
        assert!((p - expected).abs() <= count_lsb);
    }

    #[test]
    fn stale_decodes_like_normal_but_flagged() {
        let cal = cal();
        let count = cal.max_count as u16;
        let normal = decode_pressure(count, &cal);
        let stale = decode_pressure((0b10 << 14) | count, &cal);

        assert_eq!(normal.value_or_zero(), stale.value_or_zero());
        assert_eq!(normal, Measurement::Valid { value: cal.p_max, stale: false });
        assert_eq!(stale, Measurement::Valid { value: cal.p_max, stale: true });
    }

    #[test]
    fn zero_offset_shifts_decoded_pressure() {
        let mut cal = cal();
        let word = 0x2000u16;
        let untrimmed = decode_pressure(word, &cal).value_or_zero();

        cal.zero_count_offset = 100;
        let trimmed = decode_pressure(word, &cal).value_or_zero();

        let count_lsb = cal.p_range / (cal.max_count - cal.min_count) as f32;
        assert!((trimmed - untrimmed - 100.0 * count_lsb).abs() < 1e-3);
    }

    #[test]
    fn temperature_decode() {
        let cal = cal();

        // 0x7FF (2047) at bits 5-15, Normal status
        let long = 0x7FFu32 << 5;
        let t = decode_temperature(long, &cal).value_or_zero();
        assert!((t - (2047.0 * 200.0 / 2048.0 - 50.0)).abs() < 1e-3);

        // Count 1024 is exactly 50°C on the 2048 scale
        let long = 1024u32 << 5;
        let t = decode_temperature(long, &cal).value_or_zero();
        assert!((t - 50.0).abs() < 0.1);

        // Error status rejected
        let long = (0b01u32 << 30) | (1024 << 5);
        assert_eq!(
            decode_temperature(long, &cal),
            Measurement::Invalid(Status::Error)
        );
    }
}
