use std::collections::{BTreeMap, VecDeque};

use serde::Serialize;

use crate::types::{Price, Quantity, RestingOrder, Side};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LevelSnapshot {
    pub price: Price,
    pub orders: Vec<RestingOrder>,
}

/// Owned copy of one book, levels in priority order (best first).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookSnapshot {
    pub side: Side,
    pub levels: Vec<LevelSnapshot>,
}

impl BookSnapshot {
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// One side of the market. Every stored queue is non-empty and holds only
/// orders with a positive remaining quantity, oldest first.
#[derive(Debug, Clone)]
pub struct Book {
    side: Side,
    levels: BTreeMap<Price, VecDeque<RestingOrder>>,
}

impl Book {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of price levels.
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn order_count(&self) -> usize {
        self.levels.values().map(VecDeque::len).sum()
    }

    pub fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    pub fn level(&self, price: Price) -> Option<&VecDeque<RestingOrder>> {
        self.levels.get(&price)
    }

    /// Levels from best to worst price.
    pub fn levels(&self) -> Box<dyn Iterator<Item = (Price, &VecDeque<RestingOrder>)> + '_> {
        let iter = self.levels.iter().map(|(price, queue)| (*price, queue));
        match self.side {
            Side::Buy => Box::new(iter.rev()),
            Side::Sell => Box::new(iter),
        }
    }

    pub fn depth(&self, max_levels: usize) -> Vec<(Price, Quantity)> {
        self.levels()
            .take(max_levels)
            .map(|(price, queue)| (price, queue.iter().map(|o| o.quantity).sum()))
            .collect()
    }

    pub fn snapshot(&self) -> BookSnapshot {
        BookSnapshot {
            side: self.side,
            levels: self
                .levels()
                .map(|(price, queue)| LevelSnapshot {
                    price,
                    orders: queue.iter().cloned().collect(),
                })
                .collect(),
        }
    }

    /// Appends an order at the tail of its price level. Zero-quantity
    /// orders are dropped so no empty order ever rests.
    pub fn push(&mut self, order: RestingOrder) {
        debug_assert_eq!(order.side, self.side);
        if order.quantity == 0 {
            return;
        }
        self.levels.entry(order.price).or_default().push_back(order);
    }

    pub(crate) fn best_level_mut(&mut self) -> Option<(Price, &mut VecDeque<RestingOrder>)> {
        let entry = match self.side {
            Side::Buy => self.levels.iter_mut().next_back(),
            Side::Sell => self.levels.iter_mut().next(),
        };
        entry.map(|(price, queue)| (*price, queue))
    }

    pub(crate) fn remove_level_if_empty(&mut self, price: Price) {
        if self.levels.get(&price).is_some_and(VecDeque::is_empty) {
            self.levels.remove(&price);
        }
    }
}
