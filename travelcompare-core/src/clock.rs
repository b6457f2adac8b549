//! Source of the current instant, injectable for tests.

use chrono::{DateTime, Utc};

/// Provide the current UTC instant.
pub trait Clock: Send + Sync {
    /// The instant used to decide whether a departure lies in the future.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
