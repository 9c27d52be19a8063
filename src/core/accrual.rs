//! Lazy accrual: the stored balance plus whatever the current mode has
//! earned or cost since it started.

use crate::models::Record;
use crate::utils::time::seconds_to_hours;

pub use crate::models::mode::{RATE_RESEARCH, RATE_WORK};
pub use crate::utils::formatting::format_duration;

/// Live balance at `now` (epoch seconds).
pub fn current_balance(record: &Record, now: f64) -> f64 {
    if record.mode.is_idle() {
        return record.balance;
    }

    let elapsed_hours = seconds_to_hours(now - record.session_start);
    record.balance + elapsed_hours * record.mode.rate()
}
