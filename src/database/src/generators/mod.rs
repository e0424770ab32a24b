mod calendar;
mod catalog;

pub use calendar::*;
pub use catalog::*;
