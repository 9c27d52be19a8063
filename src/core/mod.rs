pub mod accrual;
pub mod action;
pub mod display;
pub mod logic;

pub use accrual::{current_balance, format_duration};
pub use action::Action;
pub use display::{IconStyle, MenuTarget, RenderOptions, StatusView, render};
pub use logic::Core;
