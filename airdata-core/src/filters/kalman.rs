//! Scalar Kalman Filter for Pressure Estimation
//!
//! ## Overview
//!
//! A one-dimensional Kalman filter with no explicit process model beyond
//! additive noise: the state is assumed constant between samples and allowed
//! to random-walk with variance `q`. This is the right model for a
//! differential pressure that changes slowly relative to the sample rate.
//!
//! ## Algorithm
//!
//! Per update, with measurement `z`:
//!
//! ```text
//! Predict:  x̂ₖ|ₖ₋₁ = x̂ₖ₋₁          (constant-value model)
//!           Pₖ|ₖ₋₁ = Pₖ₋₁ + Q
//! Gain:     K      = Pₖ|ₖ₋₁ / (Pₖ|ₖ₋₁ + R)
//! Correct:  x̂ₖ     = x̂ₖ|ₖ₋₁ + K·(z - x̂ₖ|ₖ₋₁)
//!           Pₖ     = (1 - K)·Pₖ|ₖ₋₁
//! ```
//!
//! ## Tuning
//!
//! - `q` (process noise): how much the true value may wander between
//!   samples. Larger q tracks faster, smooths less.
//! - `r` (measurement noise): sensor noise variance. Larger r trusts the
//!   estimate over the measurement.
//!
//! The reference airdata design used `q = 10, r = 100_000` for differential
//! pressure in pascals at 100 Hz.
//!
//! There is no reset: to restart estimation, construct a fresh instance.

use super::ScalarFilter;

/// Recursive minimum-variance estimator for a scalar signal
#[derive(Debug, Clone)]
pub struct ScalarKalman {
    /// Process noise variance (Q)
    q: f32,
    /// Measurement noise variance (R)
    r: f32,
    /// Estimate error covariance (P)
    p: f32,
    /// Kalman gain from the last update (K)
    k: f32,
    /// Current estimate
    x_est: f32,
}

impl ScalarKalman {
    /// Create an estimator.
    ///
    /// `estimate_error` is the initial error covariance: how far
    /// `initial_estimate` may be from the truth. A large value makes the
    /// first measurements dominate.
    pub fn new(process_noise: f32, measurement_noise: f32, estimate_error: f32, initial_estimate: f32) -> Self {
        Self {
            q: process_noise,
            r: measurement_noise,
            p: estimate_error,
            k: 0.0,
            x_est: initial_estimate,
        }
    }

    /// Feed one measurement and return the updated estimate
    pub fn update(&mut self, measurement: f32) -> f32 {
        // Predict step
        let x_pred = self.x_est;
        let p_pred = self.p + self.q;

        // Update step
        self.k = p_pred / (p_pred + self.r);
        self.x_est = x_pred + self.k * (measurement - x_pred);
        self.p = (1.0 - self.k) * p_pred;

        self.x_est
    }

    /// Current estimate without feeding a new measurement
    pub fn estimate(&self) -> f32 {
        self.x_est
    }

    /// Current estimate error covariance
    pub fn error_covariance(&self) -> f32 {
        self.p
    }

    /// Gain applied on the last update
    pub fn gain(&self) -> f32 {
        self.k
    }
}

impl ScalarFilter for ScalarKalman {
    fn update(&mut self, input: f32) -> f32 {
        ScalarKalman::update(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_monotonically_to_constant_measurement() {
        let mut kf = ScalarKalman::new(0.01, 1.0, 1.0, 0.0);
        let target = 10.0;

        let mut prev = kf.estimate();
        for _ in 0..100 {
            let est = kf.update(target);
            // Each correction moves toward the measurement, never past it
            assert!(est > prev);
            assert!(est <= target);
            prev = est;
        }
        assert!((prev - target).abs() < 0.1);
    }

    #[test]
    fn stays_within_noise_envelope_once_settled() {
        let mut kf = ScalarKalman::new(0.01, 10.0, 1.0, 5.0);

        // Settle P on the center value first
        for _ in 0..200 {
            kf.update(5.0);
        }

        // Alternating ±1 noise around 5.0 must not drag the estimate outside
        // the envelope
        for i in 0..200 {
            let z = if i % 2 == 0 { 6.0 } else { 4.0 };
            let est = kf.update(z);
            assert!(est > 4.0 && est < 6.0);
        }
        assert!((kf.estimate() - 5.0).abs() < 0.5);
    }

    #[test]
    fn gain_shrinks_as_covariance_settles() {
        let mut kf = ScalarKalman::new(0.01, 100.0, 100.0, 0.0);
        kf.update(1.0);
        let early_gain = kf.gain();
        for _ in 0..500 {
            kf.update(1.0);
        }
        assert!(kf.gain() < early_gain);
        assert!(kf.error_covariance() < 100.0);
    }

    #[test]
    fn trait_dispatch_matches_inherent() {
        let mut a = ScalarKalman::new(1.0, 10.0, 1.0, 0.0);
        let mut b = a.clone();
        let via_inherent = a.update(3.0);
        let via_trait = ScalarFilter::update(&mut b, 3.0);
        assert_eq!(via_inherent, via_trait);
    }
}
