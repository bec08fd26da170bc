//! Deadband Filters: Fixed and Adaptive Reference
//!
//! ## Why Two Variants?
//!
//! Both suppress small fluctuations, but they anchor the deadband
//! differently, and the difference matters for airdata:
//!
//! - [`DeadbandFilter`] anchors at **zero**. Inputs smaller than the deadband
//!   are treated as noise around a zero differential pressure and the output
//!   decays toward 0; larger inputs are tracked (with exponential
//!   smoothing). This kills the "2-knot airspeed while parked" jitter.
//!
//! - [`SmoothDeadband`] anchors at **its own current output**. Inputs within
//!   the deadband of the last output are rejected outright (no decay);
//!   excursions beyond it move the output by `error * smoothing`. The result
//!   is quantized-step tracking that follows the signal but holds rock
//!   steady between genuine changes - the behavior wanted for a displayed
//!   airspeed that should not flicker.
//!
//! With identical parameters the two disagree as soon as the signal sits
//! away from zero: the fixed variant keeps re-centering on the input, the
//! adaptive one holds its last accepted value.

use super::ScalarFilter;

// libm keeps the comparison identical on targets without an FPU
use libm::fabsf;

/// Deadband anchored at zero, with exponential approach to the target
#[derive(Debug, Clone)]
pub struct DeadbandFilter {
    deadband: f32,
    smoothing: f32,
    output: f32,
}

impl DeadbandFilter {
    /// Filter with the given deadband (same unit as the signal) and
    /// smoothing in `(0, 1]`; smoothing 1.0 snaps directly to the target.
    pub fn new(deadband: f32, smoothing: f32) -> Self {
        Self {
            deadband,
            smoothing,
            output: 0.0,
        }
    }

    /// Feed one sample and return the filtered output
    pub fn update(&mut self, input: f32) -> f32 {
        let target = if fabsf(input) < self.deadband {
            // Small excursions are noise around zero
            0.0
        } else {
            input
        };

        // Exponential approach, not an instantaneous snap
        self.output += (target - self.output) * self.smoothing;
        self.output
    }

    /// Current output without feeding a new sample
    pub fn output(&self) -> f32 {
        self.output
    }
}

impl ScalarFilter for DeadbandFilter {
    fn update(&mut self, input: f32) -> f32 {
        DeadbandFilter::update(self, input)
    }
}

/// Deadband that follows the filter's own output
#[derive(Debug, Clone)]
pub struct SmoothDeadband {
    deadband: f32,
    smoothing: f32,
    output: f32,
}

impl SmoothDeadband {
    /// Filter with the given deadband and smoothing in `(0, 1]`
    pub fn new(deadband: f32, smoothing: f32) -> Self {
        Self {
            deadband,
            smoothing,
            output: 0.0,
        }
    }

    /// Feed one sample and return the filtered output
    pub fn update(&mut self, input: f32) -> f32 {
        let error = input - self.output;

        if fabsf(error) < self.deadband {
            // Inside deadband: hold, no decay
            return self.output;
        }

        self.output += error * self.smoothing;
        self.output
    }

    /// Force the output to a specific value
    pub fn reset(&mut self, value: f32) {
        self.output = value;
    }

    /// Current output without feeding a new sample
    pub fn output(&self) -> f32 {
        self.output
    }
}

impl ScalarFilter for SmoothDeadband {
    fn update(&mut self, input: f32) -> f32 {
        SmoothDeadband::update(self, input)
    }
}
