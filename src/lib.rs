pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod matching;
pub mod session;
pub mod telemetry;
pub mod types;

pub mod metrics;

pub use engine::{Execution, MatchingEngine, SharedEngine};
pub use error::{EngineError, ParseError, SessionError};
pub use types::{Fill, NewOrder, Price, Quantity, RestingOrder, Side, Sign, TraderId};
