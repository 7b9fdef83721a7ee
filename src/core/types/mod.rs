pub mod config;
mod error;
mod session;
mod statistics;
mod stats;

pub use error::*;
pub use session::*;
pub use statistics::*;
pub use stats::*;
