//! Differential Pressure to Airspeed Conversion
//!
//! ## Physics
//!
//! A pitot-static probe measures the dynamic pressure of the airstream. For
//! incompressible flow, Bernoulli's equation gives:
//!
//! ```text
//! ΔP = ½·ρ·v²    ⇒    v = √(2·ΔP / ρ)
//! ```
//!
//! with ρ fixed at the ISA sea-level density of 1.225 kg/m³. No altitude or
//! temperature compensation is applied, so the result is an *indicated*
//! airspeed: it reads low at altitude, which is exactly what pilots fly by.
//!
//! The compressibility correction matters above roughly 100 m/s; the sensors
//! conditioned here saturate well below that, so the incompressible form is
//! sufficient.
//!
//! ## Edge Cases
//!
//! Negative differential pressure (probe suction, gusts from behind, or a
//! rejected sample decoded as zero minus an offset) is clamped to zero before
//! the square root, so the conversion can never produce NaN.

use libm::{powf, sqrtf};

use crate::constants::{
    BAROMETRIC_EXPONENT, BAROMETRIC_SCALE_M, HPA_TO_PA, MPS_TO_KNOTS, M_TO_FT,
    SEA_LEVEL_AIR_DENSITY,
};

/// Convert a differential pressure in hPa to airspeed in m/s.
///
/// Pressure is clamped to ≥ 0 before the square root.
pub fn airspeed_mps(pressure_hpa: f32) -> f32 {
    let pressure_hpa = if pressure_hpa > 0.0 { pressure_hpa } else { 0.0 };
    let delta_p_pa = pressure_hpa * HPA_TO_PA;
    sqrtf(2.0 * delta_p_pa / SEA_LEVEL_AIR_DENSITY)
}

/// Convert a differential pressure in hPa to airspeed in knots
pub fn airspeed_knots(pressure_hpa: f32) -> f32 {
    airspeed_mps(pressure_hpa) * MPS_TO_KNOTS
}

/// Pressure altitude in feet from a static pressure and QNH reference.
///
/// Tropospheric barometric formula; `qnh_hpa` is the sea-level reference
/// (standard atmosphere: 1013.25).
pub fn pressure_to_altitude_ft(pressure_hpa: f32, qnh_hpa: f32) -> f32 {
    let altitude_m =
        BAROMETRIC_SCALE_M * (1.0 - powf(pressure_hpa / qnh_hpa, BAROMETRIC_EXPONENT));
    altitude_m * M_TO_FT
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SEA_LEVEL_PRESSURE_HPA;

    #[test]
    fn half_hpa_reference_point() {
        // 0.5 hPa = 50 Pa: v = sqrt(2*50/1.225) ≈ 9.035 m/s ≈ 17.56 kt
        let v = airspeed_mps(0.5);
        assert!((v - 9.035).abs() < 0.01);

        let kt = airspeed_knots(0.5);
        assert!((kt - 17.56).abs() < 0.02);
    }

    #[test]
    fn zero_pressure_zero_speed() {
        assert_eq!(airspeed_mps(0.0), 0.0);
        assert_eq!(airspeed_knots(0.0), 0.0);
    }

    #[test]
    fn negative_pressure_clamped_not_nan() {
        let v = airspeed_mps(-3.0);
        assert_eq!(v, 0.0);
        assert!(!airspeed_knots(-100.0).is_nan());
    }

    #[test]
    fn speed_monotonic_in_pressure() {
        let mut last = 0.0;
        for p in [0.1, 0.5, 1.0, 2.0, 5.0] {
            let v = airspeed_knots(p);
            assert!(v > last);
            last = v;
        }
    }

    #[test]
    fn altitude_at_reference_pressure_is_zero() {
        let alt = pressure_to_altitude_ft(SEA_LEVEL_PRESSURE_HPA, SEA_LEVEL_PRESSURE_HPA);
        assert!(alt.abs() < 0.5);
    }

    #[test]
    fn altitude_increases_as_pressure_drops() {
        // ~850 hPa is roughly 5000 ft
        let alt = pressure_to_altitude_ft(850.0, SEA_LEVEL_PRESSURE_HPA);
        assert!(alt > 4000.0 && alt < 6000.0);
    }
}
