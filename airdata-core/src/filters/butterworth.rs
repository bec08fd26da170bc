//! Fixed 2nd-Order Butterworth Low-Pass
//!
//! ## Overview
//!
//! A direct-form IIR low-pass with coefficients precomputed for one specific
//! sample-rate/cutoff pair: **100 Hz sampling, 5 Hz cutoff**. The Butterworth
//! design gives a maximally flat passband, which keeps slow airspeed trends
//! undistorted while attenuating prop-wash and turbulence noise.
//!
//! ## Recurrence
//!
//! ```text
//! y[n] = a0·x[n] + a1·x[n-1] + a2·x[n-2] - b1·y[n-1] - b2·y[n-2]
//! ```
//!
//! The filter is **not** parameterized by runtime sample rate: if the caller
//! feeds it at anything other than 100 Hz, the effective cutoff silently
//! shifts. Keep the control-loop period matched to the design rate.

use super::ScalarFilter;

// Coefficients for 2nd-order Butterworth low-pass
// Sample rate = 100 Hz, Cutoff = 5 Hz
const A0: f32 = 0.067455;
const A1: f32 = 0.134911;
const A2: f32 = 0.067455;
const B1: f32 = -1.14298;
const B2: f32 = 0.41280;

/// 2nd-order Butterworth low-pass, fixed at 100 Hz sample / 5 Hz cutoff
#[derive(Debug, Clone, Default)]
pub struct ButterworthLowPass {
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl ButterworthLowPass {
    /// Filter with cleared state
    pub const fn new() -> Self {
        Self { x1: 0.0, x2: 0.0, y1: 0.0, y2: 0.0 }
    }

    /// Feed one sample and return the filtered output
    pub fn process(&mut self, input: f32) -> f32 {
        let output = A0 * input + A1 * self.x1 + A2 * self.x2
            - B1 * self.y1 - B2 * self.y2;

        // Shift states
        self.x2 = self.x1;
        self.x1 = input;
        self.y2 = self.y1;
        self.y1 = output;

        output
    }

    /// Clear all four state variables.
    ///
    /// After a reset the next output depends only on the next input
    /// (`y = a0·x`), exactly as if freshly constructed.
    pub fn reset(&mut self) {
        self.x1 = 0.0;
        self.x2 = 0.0;
        self.y1 = 0.0;
        self.y2 = 0.0;
    }
}

impl ScalarFilter for ButterworthLowPass {
    fn update(&mut self, input: f32) -> f32 {
        self.process(input)
    }
}
