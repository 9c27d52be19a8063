use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::AppError;

/// Activity currently being tracked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Mode {
    #[default]
    Idle,
    Work,
    Research,
}

/// Balance change per hour of work: one hour worked pays off one hour of debt.
pub const RATE_WORK: f64 = 1.0;
/// Balance change per hour of research: one hour costs four hours of debt.
pub const RATE_RESEARCH: f64 = -4.0;

impl Mode {
    /// Hours-equivalent balance change per wall-clock hour.
    pub fn rate(&self) -> f64 {
        match self {
            Mode::Idle => 0.0,
            Mode::Work => RATE_WORK,
            Mode::Research => RATE_RESEARCH,
        }
    }

    /// Convert enum → stored string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            Mode::Idle => "IDLE",
            Mode::Work => "WORK",
            Mode::Research => "RESEARCH",
        }
    }

    /// Convert stored string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "IDLE" => Some(Mode::Idle),
            "WORK" => Some(Mode::Work),
            "RESEARCH" => Some(Mode::Research),
            _ => None,
        }
    }

    /// Text shown in the status block of the menu.
    pub fn label(&self) -> &'static str {
        match self {
            Mode::Idle => "Idle",
            Mode::Work => "Working (Payoff)",
            Mode::Research => "Researching (4x Debt)",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Mode::Idle)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_db_str())
    }
}

impl FromStr for Mode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::from_db_str(s).ok_or_else(|| AppError::InvalidMode(s.to_string()))
    }
}
