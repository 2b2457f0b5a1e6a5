use std::sync::Arc;

use parking_lot::RwLock;

use crate::engine::kernel::{Execution, MatchingEngine};
use crate::error::EngineError;
use crate::matching::BookSnapshot;
use crate::types::{NewOrder, Price, Quantity, Side};

/// Cloneable handle to one engine shared between threads.
///
/// A submission holds the write lock from side validation until the ledger
/// is cleared, so orders never interleave. Snapshots take the read lock and
/// copy out, so they only ever see whole orders.
#[derive(Clone, Debug, Default)]
pub struct SharedEngine {
    inner: Arc<RwLock<MatchingEngine>>,
}

impl SharedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_engine(engine: MatchingEngine) -> Self {
        Self {
            inner: Arc::new(RwLock::new(engine)),
        }
    }

    pub fn submit(&self, order: NewOrder) -> Result<Execution, EngineError> {
        self.inner.write().submit(order)
    }

    pub fn bids(&self) -> BookSnapshot {
        self.inner.read().bids().snapshot()
    }

    pub fn asks(&self) -> BookSnapshot {
        self.inner.read().asks().snapshot()
    }

    pub fn trades(&self) -> Vec<String> {
        self.inner.read().trades().to_vec()
    }

    pub fn depth(&self, side: Side, max_levels: usize) -> Vec<(Price, Quantity)> {
        self.inner.read().order_book().book(side).depth(max_levels)
    }

    /// Runs `f` against a consistent view of the engine.
    pub fn read<R>(&self, f: impl FnOnce(&MatchingEngine) -> R) -> R {
        f(&self.inner.read())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_state() {
        let engine = SharedEngine::new();
        let other = engine.clone();

        engine.submit(NewOrder::buy("T1", 5, 30)).unwrap();
        other.submit(NewOrder::sell("T2", 5, 30)).unwrap();

        assert!(engine.bids().is_empty());
        assert!(engine.asks().is_empty());
        assert_eq!(other.trades(), vec!["T1+5@30 T2-5@30".to_string()]);
    }
}
