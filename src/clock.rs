//! Injectable time source for lifecycle timestamps.
//!
//! The registry stamps `start_time`/`end_time` through a [`Clock`] rather
//! than calling `Utc::now()` directly, so tests can drive time explicitly
//! with a [`ManualClock`] instead of sleeping.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};

/// A source of the current instant.
///
/// Implementations must return immediately — the registry queries the clock
/// synchronously inside its operations.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Controllable clock for deterministic tests.
///
/// Cloned handles share the same instant, so a test can keep advancing the
/// clock it handed to the registry.
#[derive(Debug, Clone)]
pub struct ManualClock {
    instant: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    /// Create a clock frozen at the given instant.
    pub fn new(start: DateTime<Utc>) -> Self {
        ManualClock {
            instant: Arc::new(Mutex::new(start)),
        }
    }

    /// Move the clock forward by `delta`.
    pub fn advance(&self, delta: Duration) {
        let mut instant = self.instant.lock().unwrap();
        *instant += chrono::Duration::from_std(delta).unwrap_or(chrono::Duration::zero());
    }

    /// Jump the clock to an exact instant.
    pub fn set(&self, now: DateTime<Utc>) {
        *self.instant.lock().unwrap() = now;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        ManualClock::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.instant.lock().unwrap()
    }
}
