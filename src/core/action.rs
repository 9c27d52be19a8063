use std::fmt;

use tracing::debug;

use super::accrual::current_balance;
use crate::models::{Mode, Record};

/// A transition requested on the command line or from a menu trigger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Stop,
    Work,
    Research,
    Reset,
    /// Anything else. Settles the balance and nothing more.
    Unrecognized(String),
}

impl Action {
    pub fn parse(s: &str) -> Self {
        match s {
            "stop" => Action::Stop,
            "work" => Action::Work,
            "research" => Action::Research,
            "reset" => Action::Reset,
            other => Action::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Action::Stop => "stop",
            Action::Work => "work",
            Action::Research => "research",
            Action::Reset => "reset",
            Action::Unrecognized(s) => s,
        }
    }

    /// Settles `record` at `now`, then applies the transition.
    ///
    /// Stop and reset leave `session_start` as it was: it has no meaning once
    /// the mode is idle. An unrecognized action keeps both mode and
    /// `session_start`, so the next read counts the session again from its
    /// original start.
    pub fn apply(&self, record: &Record, now: f64) -> Record {
        let mut next = *record;
        next.balance = current_balance(record, now);

        match self {
            Action::Stop => next.mode = Mode::Idle,
            Action::Work => {
                next.mode = Mode::Work;
                next.session_start = now;
            }
            Action::Research => {
                next.mode = Mode::Research;
                next.session_start = now;
            }
            Action::Reset => {
                next.balance = 0.0;
                next.mode = Mode::Idle;
            }
            Action::Unrecognized(_) => {}
        }

        debug!(
            action = self.as_str(),
            from = %record.mode,
            to = %next.mode,
            balance = next.balance,
            "transition applied"
        );
        next
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Action {
    fn from(s: &str) -> Self {
        Action::parse(s)
    }
}
