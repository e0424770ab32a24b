mod calendar;
mod catalog;
mod squad;
mod tactic;

pub use calendar::*;
pub use catalog::*;
pub use squad::*;
pub use tactic::*;
