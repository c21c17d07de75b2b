pub mod day_view;
pub mod utils;

pub use day_view::{DayView, DayViewResult};
