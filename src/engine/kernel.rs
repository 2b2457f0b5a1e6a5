use tracing::{debug, instrument, warn};

use crate::error::EngineError;
use crate::matching::{Book, FillLedger, OrderBook};
use crate::metrics;
use crate::types::{Fill, NewOrder, Quantity};

/// Outcome of one submitted order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Execution {
    pub fills: Vec<Fill>,
    pub rested: Quantity,
    /// The settlement line appended to the trade report, if anything filled.
    pub report: Option<String>,
}

impl Execution {
    pub fn filled_quantity(&self) -> Quantity {
        self.fills.iter().map(|f| f.quantity).sum()
    }
}

/// Single-instrument matching state: both books, the per-order fill ledger
/// and the append-only trade report.
#[derive(Debug, Default)]
pub struct MatchingEngine {
    book: OrderBook,
    ledger: FillLedger,
    trades: Vec<String>,
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Matches `order` to completion and settles its fills into at most one
    /// report line. An unknown side tag is rejected before anything changes.
    #[instrument(
        level = "debug",
        skip_all,
        fields(trader = %order.trader, side = %order.side, quantity = order.quantity, price = order.price)
    )]
    pub fn submit(&mut self, order: NewOrder) -> Result<Execution, EngineError> {
        let side = order.side().inspect_err(|err| {
            warn!(%err, "rejected order");
            metrics::record_rejected();
        })?;

        let (fills, rested) = self
            .book
            .place_order(&order.trader, side, order.quantity, order.price);
        for fill in &fills {
            debug!(
                passive = %fill.passive,
                price = fill.price,
                quantity = fill.quantity,
                "fill"
            );
            self.ledger.record(fill);
        }
        if rested > 0 {
            debug!(rested, "order rested");
        }

        let report = self.ledger.settle();
        if let Some(line) = &report {
            self.trades.push(line.clone());
        }
        metrics::record_execution(&fills, report.is_some());

        Ok(Execution {
            fills,
            rested,
            report,
        })
    }

    pub fn bids(&self) -> &Book {
        self.book.bids()
    }

    pub fn asks(&self) -> &Book {
        self.book.asks()
    }

    pub fn order_book(&self) -> &OrderBook {
        &self.book
    }

    pub fn trades(&self) -> &[String] {
        &self.trades
    }
}
