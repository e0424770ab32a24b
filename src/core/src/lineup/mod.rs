mod board;
mod catalog;
mod error;
mod gesture;
mod player;
mod scoring;
mod session;
mod snapshot;
mod submission;

pub use board::*;
pub use catalog::*;
pub use error::*;
pub use gesture::*;
pub use player::*;
pub use scoring::*;
pub use session::*;
pub use snapshot::*;
pub use submission::*;
