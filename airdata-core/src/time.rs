//! Time sources for event timestamping
//!
//! Provides a clock abstraction so the core never touches platform timing
//! directly:
//! - System clock (when `std` is available)
//! - Fixed clock (for tests)
//! - Host-supplied implementations (hardware timers, RTC) via [`TimeSource`]

/// Timestamp in milliseconds since epoch (or device boot for monotonic)
pub type Timestamp = u64;

/// Source of time for event records
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Source that always reports `timestamp`
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to an absolute timestamp
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut t = FixedTime::new(1000);
        assert_eq!(t.now(), 1000);
        t.advance(50);
        assert_eq!(t.now(), 1050);
        t.set(0);
        assert_eq!(t.now(), 0);
        assert!(!t.is_wall_clock());
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_is_wall_clock() {
        let t = SystemTime;
        assert!(t.is_wall_clock());
        assert!(t.now() > 0);
    }
}
