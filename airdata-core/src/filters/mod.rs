//! Scalar Filter Cascade for Pressure and Temperature Conditioning
//!
//! ## Overview
//!
//! Raw differential-pressure readings are noisy: turbulence, bus jitter, and
//! quantization all show up in the count stream. This module provides five
//! numerically distinct, independently usable filters that the caller
//! composes into a cascade:
//!
//! - [`ScalarKalman`] - recursive minimum-variance estimator for a
//!   constant-value random-walk model
//! - [`ButterworthLowPass`] - fixed-coefficient 2nd-order IIR low-pass
//! - [`ExponentialLowPass`] - single-pole IIR with configurable smoothing
//! - [`DeadbandFilter`] / [`SmoothDeadband`] - suppress small fluctuations
//!   around a fixed or moving reference
//! - [`RollingAverage`] / [`RollingAverageInt`] - fixed-size circular-buffer
//!   means, with drift-corrected resync for the float variant
//!
//! ## Composition
//!
//! Every float filter implements [`ScalarFilter`], so cascades can be built
//! by hand or held as trait objects:
//!
//! ```rust
//! use airdata_core::filters::{ScalarFilter, ScalarKalman, ButterworthLowPass};
//!
//! let mut kalman = ScalarKalman::new(10.0, 100_000.0, 1.0, 0.0);
//! let mut lowpass = ButterworthLowPass::new();
//!
//! let raw = 0.42;
//! let smoothed = lowpass.update(kalman.update(raw));
//! # let _ = smoothed;
//! ```
//!
//! ## Ownership Model
//!
//! Each filter owns exactly one mutable state record. One instance serves one
//! physical signal and one processing stage; nothing is shared between the
//! pressure and temperature channels, and nothing here is thread-safe -
//! control loops call these from a single task.

mod butterworth;
mod deadband;
mod kalman;
mod lowpass;
mod rolling;

pub use butterworth::ButterworthLowPass;
pub use deadband::{DeadbandFilter, SmoothDeadband};
pub use kalman::ScalarKalman;
pub use lowpass::ExponentialLowPass;
pub use rolling::{RollingAverage, RollingAverageInt};

/// A stateful filter over a scalar signal.
///
/// The trait is the composition seam: cascades of heterogeneous filters can
/// be driven uniformly, and test harnesses can swap stages.
pub trait ScalarFilter {
    /// Feed one sample, returning the filtered output
    fn update(&mut self, input: f32) -> f32;
}
