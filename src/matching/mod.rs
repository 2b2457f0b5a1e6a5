//! Price-time priority matching for a single instrument.

pub mod book;
pub mod ledger;
pub mod orderbook;

pub use book::{Book, BookSnapshot, LevelSnapshot};
pub use ledger::FillLedger;
pub use orderbook::OrderBook;
