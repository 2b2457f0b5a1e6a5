use crate::matching::book::Book;
use crate::types::{Fill, Price, Quantity, RestingOrder, Side};

/// Both sides of the single instrument and the crossing loop between them.
#[derive(Debug, Clone)]
pub struct OrderBook {
    bids: Book,
    asks: Book,
}

impl Default for OrderBook {
    fn default() -> Self {
        Self::new()
    }
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: Book::new(Side::Buy),
            asks: Book::new(Side::Sell),
        }
    }

    pub fn bids(&self) -> &Book {
        &self.bids
    }

    pub fn asks(&self) -> &Book {
        &self.asks
    }

    pub fn book(&self, side: Side) -> &Book {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }

    fn book_mut(&mut self, side: Side) -> &mut Book {
        match side {
            Side::Buy => &mut self.bids,
            Side::Sell => &mut self.asks,
        }
    }

    /// Matches an incoming limit order against the opposite side, best price
    /// first and FIFO within a price, then rests whatever is left.
    ///
    /// Every fill executes at the resting order's price. Returns the fills in
    /// execution order and the quantity that was rested.
    pub fn place_order(
        &mut self,
        trader: &str,
        side: Side,
        quantity: Quantity,
        limit: Price,
    ) -> (Vec<Fill>, Quantity) {
        let mut fills = Vec::new();
        let mut remaining = quantity;
        let makers = self.book_mut(side.opposite());

        while remaining > 0 {
            let Some((best_price, queue)) = makers.best_level_mut() else {
                break;
            };
            if !side.crosses(limit, best_price) {
                break;
            }

            while remaining > 0 {
                let Some(maker) = queue.front_mut() else {
                    break;
                };
                let trade_qty = remaining.min(maker.quantity);
                remaining -= trade_qty;
                maker.quantity -= trade_qty;

                fills.push(Fill {
                    aggressor: trader.to_string(),
                    aggressor_side: side,
                    passive: maker.trader.clone(),
                    price: best_price,
                    quantity: trade_qty,
                });

                if maker.quantity == 0 {
                    queue.pop_front();
                }
            }

            makers.remove_level_if_empty(best_price);
        }

        if remaining > 0 {
            self.book_mut(side).push(RestingOrder {
                trader: trader.to_string(),
                side,
                quantity: remaining,
                price: limit,
            });
        }

        (fills, remaining)
    }

    /// Best bid strictly below best ask, or at least one side empty.
    pub fn is_uncrossed(&self) -> bool {
        match (self.bids.best_price(), self.asks.best_price()) {
            (Some(bid), Some(ask)) => bid < ask,
            _ => true,
        }
    }
}
