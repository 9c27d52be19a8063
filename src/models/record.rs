use serde::{Deserialize, Serialize};

use super::mode::Mode;

/// The persisted tracker state.
///
/// `balance` is settled as of the moment the record was written; time spent
/// since `session_start` in a non-idle mode is folded in on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Hours-equivalent credit (positive) or debt (negative).
    pub balance: f64,
    pub mode: Mode,
    /// Seconds since the Unix epoch when the current mode began.
    /// Files written by the first releases call this `start_time`.
    #[serde(alias = "start_time")]
    pub session_start: f64,
}

impl Default for Record {
    fn default() -> Self {
        Self {
            balance: 0.0,
            mode: Mode::Idle,
            session_start: 0.0,
        }
    }
}

impl Record {
    pub fn new(balance: f64, mode: Mode, session_start: f64) -> Self {
        Self {
            balance,
            mode,
            session_start,
        }
    }
}
