pub mod mode;
pub mod record;

pub use mode::Mode;
pub use record::Record;
