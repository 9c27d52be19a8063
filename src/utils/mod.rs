pub mod clock;
pub mod formatting;
pub mod logging;
pub mod path;
pub mod time;

pub use clock::{Clock, FixedClock, SystemClock};
pub use formatting::format_duration;
