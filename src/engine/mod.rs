pub mod kernel;
pub mod shared;

pub use kernel::{Execution, MatchingEngine};
pub use shared::SharedEngine;
