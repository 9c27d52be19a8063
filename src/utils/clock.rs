use chrono::{DateTime, Utc};

use super::time::{from_epoch_seconds, to_epoch_seconds};

/// Source of "now" for the tracker. Every read of the current time goes
/// through one of these.
pub trait Clock {
    fn time(&self) -> DateTime<Utc>;

    /// Fractional seconds since the Unix epoch.
    fn epoch_seconds(&self) -> f64 {
        to_epoch_seconds(self.time())
    }
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn time(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock stuck at one instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    time: DateTime<Utc>,
}

impl FixedClock {
    pub fn new(time: DateTime<Utc>) -> Self {
        Self { time }
    }

    pub fn from_epoch_seconds(secs: f64) -> Option<Self> {
        from_epoch_seconds(secs).map(Self::new)
    }

    /// Moves the clock forward (or backward, for negative values).
    pub fn advance_seconds(&mut self, secs: i64) {
        self.time += chrono::Duration::seconds(secs);
    }
}

impl Clock for FixedClock {
    fn time(&self) -> DateTime<Utc> {
        self.time
    }
}
