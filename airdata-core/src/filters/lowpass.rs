//! Single-Pole Exponential Low-Pass
//!
//! The cheapest smoother in the cascade:
//!
//! ```text
//! y[n] = α·x[n] + (1-α)·y[n-1]
//! ```
//!
//! The first sample seeds the state directly, avoiding the startup transient
//! toward zero that a zero-initialized IIR would show. `α ∈ (0, 1]`; larger
//! alpha tracks faster and smooths less.

use super::ScalarFilter;

/// Single-pole IIR low-pass with configurable smoothing factor
#[derive(Debug, Clone)]
pub struct ExponentialLowPass {
    alpha: f32,
    filtered_value: f32,
    initialized: bool,
}

impl ExponentialLowPass {
    /// Filter with smoothing factor `alpha` in `(0, 1]`
    pub fn new(alpha: f32) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0);
        Self {
            alpha,
            filtered_value: 0.0,
            initialized: false,
        }
    }

    /// Feed one sample and return the filtered output
    pub fn update(&mut self, input: f32) -> f32 {
        if !self.initialized {
            self.filtered_value = input;
            self.initialized = true;
        } else {
            self.filtered_value = self.alpha * input + (1.0 - self.alpha) * self.filtered_value;
        }
        self.filtered_value
    }

    /// Current filtered value without feeding a new sample
    pub fn value(&self) -> f32 {
        self.filtered_value
    }
}

impl ScalarFilter for ExponentialLowPass {
    fn update(&mut self, input: f32) -> f32 {
        ExponentialLowPass::update(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_sample_seeds_state() {
        let mut f = ExponentialLowPass::new(0.1);
        // No transient from zero: the first output is the input itself
        assert_eq!(f.update(42.0), 42.0);
    }

    #[test]
    fn smooths_subsequent_samples() {
        let mut f = ExponentialLowPass::new(0.25);
        f.update(0.0);
        let y = f.update(8.0);
        assert!((y - 2.0).abs() < 1e-6);
        assert_eq!(f.value(), y);
    }

    #[test]
    fn alpha_one_passes_through() {
        let mut f = ExponentialLowPass::new(1.0);
        f.update(5.0);
        assert_eq!(f.update(-3.0), -3.0);
    }

    #[test]
    fn converges_to_constant_input() {
        let mut f = ExponentialLowPass::new(0.1);
        f.update(0.0);
        let mut y = 0.0;
        for _ in 0..200 {
            y = f.update(1.0);
        }
        assert!((y - 1.0).abs() < 1e-3);
    }
}
