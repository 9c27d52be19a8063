//! time_hedge main entrypoint.
//! The status-bar host treats a non-zero exit as a broken plugin, so the
//! process always exits successfully.

use time_hedge::run;
use time_hedge::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
    }
}
