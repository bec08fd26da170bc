//! Rolling Averages with Drift-Corrected Running Sums
//!
//! ## Design
//!
//! Both variants keep a fixed-capacity circular buffer and a running sum so
//! that each update is O(1): subtract the slot being overwritten, add the new
//! value, divide by the fill count. Capacity is a const generic, as with the
//! rest of the crate's fixed-size state - no heap, size known at compile
//! time.
//!
//! ## Float Drift and Resync
//!
//! For [`RollingAverage`] the running sum is only an *approximation* of the
//! true buffer sum: every incremental add/subtract leaves a rounding residue,
//! and over millions of control-loop iterations the residue accumulates.
//! The fix is periodic resynchronization - every `resync_interval` updates
//! the sum is recomputed exactly from the buffer contents (O(N), drift-free).
//! This bounds the error of any single returned average by the round-off
//! accumulated over at most `resync_interval` updates.
//!
//! [`RollingAverageInt`] accumulates `i32` values in an `i64` sum; integer
//! arithmetic is exact, so it has no resync machinery.
//!
//! ## Invariants
//!
//! - `count = min(updates_so_far, N)`, saturating at capacity
//! - `index` is the next slot to overwrite, advancing modulo `N`
//! - unfilled slots hold zero and never contribute to the sum

use crate::constants::ROLLING_RESYNC_INTERVAL;

use super::ScalarFilter;

/// Fixed-size rolling mean over `f32` with periodic exact resummation
#[derive(Debug, Clone)]
pub struct RollingAverage<const N: usize> {
    buffer: [f32; N],
    index: usize,
    count: usize,
    sum: f32,
    updates: u32,
    resync_interval: u32,
}

impl<const N: usize> RollingAverage<N> {
    /// Empty average with the default resync interval
    pub const fn new() -> Self {
        Self {
            buffer: [0.0; N],
            index: 0,
            count: 0,
            sum: 0.0,
            updates: 0,
            resync_interval: ROLLING_RESYNC_INTERVAL,
        }
    }

    /// Override the resync interval (updates between exact resummations)
    pub const fn with_resync_interval(mut self, interval: u32) -> Self {
        self.resync_interval = interval;
        self
    }

    /// Push a value and return the mean of the last `min(count, N)` values
    pub fn update(&mut self, value: f32) -> f32 {
        self.sum -= self.buffer[self.index];
        self.buffer[self.index] = value;
        self.sum += value;

        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }

        self.updates += 1;
        if self.updates >= self.resync_interval {
            self.resync();
            self.updates = 0;
        }

        self.sum / self.count as f32
    }

    /// Clear buffer, sum, index, count, and the resync counter
    pub fn reset(&mut self) {
        self.buffer = [0.0; N];
        self.sum = 0.0;
        self.index = 0;
        self.count = 0;
        self.updates = 0;
    }

    /// Number of values currently contributing to the mean
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no values have been pushed since construction or reset
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    // Exact recomputation of the running sum from buffer contents
    fn resync(&mut self) {
        let mut sum = 0.0;
        for i in 0..self.count {
            sum += self.buffer[i];
        }
        self.sum = sum;
    }
}

impl<const N: usize> Default for RollingAverage<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ScalarFilter for RollingAverage<N> {
    fn update(&mut self, input: f32) -> f32 {
        RollingAverage::update(self, input)
    }
}

/// Fixed-size rolling mean over `i32`, exact by construction
#[derive(Debug, Clone)]
pub struct RollingAverageInt<const N: usize> {
    values: [i32; N],
    index: usize,
    count: usize,
    sum: i64,
}

impl<const N: usize> RollingAverageInt<N> {
    /// Empty average
    pub const fn new() -> Self {
        Self {
            values: [0; N],
            index: 0,
            count: 0,
            sum: 0,
        }
    }

    /// Push a value and return the truncating mean of the window
    pub fn add(&mut self, value: i32) -> i32 {
        self.sum -= self.values[self.index] as i64;
        self.values[self.index] = value;
        self.sum += value as i64;
        self.index = (self.index + 1) % N;
        if self.count < N {
            self.count += 1;
        }
        (self.sum / self.count as i64) as i32
    }

    /// Current mean without adding a value; 0 when empty
    pub fn average(&self) -> i32 {
        if self.count == 0 {
            return 0;
        }
        (self.sum / self.count as i64) as i32
    }
}

impl<const N: usize> Default for RollingAverageInt<N> {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod drift_props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // The drift bound is the point of the resync machinery: for any
        // input sequence, the incremental average never strays beyond float
        // tolerance from the exact mean of the window.
        #[test]
        fn incremental_mean_stays_near_exact(
            values in prop::collection::vec(-1000.0f32..1000.0, 16..300),
        ) {
            let mut avg = RollingAverage::<16>::new().with_resync_interval(32);
            for (i, &v) in values.iter().enumerate() {
                let got = avg.update(v);
                if i >= 15 {
                    let window = &values[i - 15..=i];
                    let expect = window.iter().sum::<f32>() / 16.0;
                    prop_assert!((got - expect).abs() < 0.05);
                }
            }
        }
    }
}
