pub mod lineup;
pub mod utils;

pub use lineup::*;
pub use utils::*;
