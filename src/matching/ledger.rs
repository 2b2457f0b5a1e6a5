use std::collections::BTreeMap;

use crate::types::{Fill, Price, Quantity, Sign, TraderId};

/// Fills of one incoming order, netted per trader, direction and price.
#[derive(Debug, Default)]
pub struct FillLedger {
    entries: BTreeMap<(TraderId, Sign), BTreeMap<Price, Quantity>>,
}

impl FillLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn credit(&mut self, trader: &str, sign: Sign, price: Price, quantity: Quantity) {
        let per_price = self.entries.entry((trader.to_string(), sign)).or_default();
        let total = per_price.entry(price).or_insert(0);
        *total = total.saturating_add(quantity);
    }

    /// Books both legs of a fill: the aggressor moves in the direction of its
    /// side, the passive trader in the opposite one.
    pub fn record(&mut self, fill: &Fill) {
        let aggressor_sign = Sign::from(fill.aggressor_side);
        let passive_sign = Sign::from(fill.aggressor_side.opposite());
        self.credit(&fill.aggressor, aggressor_sign, fill.price, fill.quantity);
        self.credit(&fill.passive, passive_sign, fill.price, fill.quantity);
    }

    /// Renders the settlement line and empties the ledger.
    ///
    /// Tokens are `<trader><sign><qty>@<price>`, sorted as plain strings
    /// (so `T1+1@100` comes before `T1+1@50`) and joined by single spaces.
    /// Returns `None` when nothing was filled.
    pub fn settle(&mut self) -> Option<String> {
        let entries = std::mem::take(&mut self.entries);
        let mut tokens: Vec<String> = entries
            .into_iter()
            .flat_map(|((trader, sign), per_price)| {
                per_price.into_iter().map(move |(price, quantity)| {
                    format!("{trader}{}{quantity}@{price}", sign.symbol())
                })
            })
            .collect();
        if tokens.is_empty() {
            return None;
        }
        tokens.sort_unstable();
        Some(tokens.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Side;

    fn fill(aggressor: &str, side: Side, passive: &str, price: Price, quantity: Quantity) -> Fill {
        Fill {
            aggressor: aggressor.to_string(),
            aggressor_side: side,
            passive: passive.to_string(),
            price,
            quantity,
        }
    }

    #[test]
    fn empty_ledger_settles_to_nothing() {
        let mut ledger = FillLedger::new();
        assert_eq!(ledger.settle(), None);
    }

    #[test]
    fn single_fill_produces_both_legs() {
        let mut ledger = FillLedger::new();
        ledger.record(&fill("T2", Side::Sell, "T1", 30, 5));
        assert_eq!(ledger.settle().as_deref(), Some("T1+5@30 T2-5@30"));
        assert!(ledger.is_empty());
    }

    #[test]
    fn same_price_fills_are_netted() {
        let mut ledger = FillLedger::new();
        ledger.record(&fill("T8", Side::Buy, "T2", 70, 5));
        ledger.record(&fill("T8", Side::Buy, "T5", 70, 3));
        ledger.record(&fill("T8", Side::Buy, "T2", 70, 1));
        assert_eq!(
            ledger.settle().as_deref(),
            Some("T2-6@70 T5-3@70 T8+9@70")
        );
    }

    #[test]
    fn tokens_sort_as_strings_not_numbers() {
        let mut ledger = FillLedger::new();
        ledger.record(&fill("A", Side::Buy, "B", 50, 1));
        ledger.record(&fill("A", Side::Buy, "B", 100, 1));
        assert_eq!(
            ledger.settle().as_deref(),
            Some("A+1@100 A+1@50 B-1@100 B-1@50")
        );
    }

    #[test]
    fn self_trade_books_both_directions() {
        let mut ledger = FillLedger::new();
        ledger.record(&fill("T1", Side::Buy, "T1", 10, 2));
        assert_eq!(ledger.settle().as_deref(), Some("T1+2@10 T1-2@10"));
    }

    #[test]
    fn settle_clears_between_orders() {
        let mut ledger = FillLedger::new();
        ledger.record(&fill("A", Side::Buy, "B", 1, 1));
        assert!(ledger.settle().is_some());
        assert_eq!(ledger.settle(), None);
    }
}
