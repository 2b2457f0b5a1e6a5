use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

pub type TraderId = String;
pub type Price = u64;
pub type Quantity = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub const BUY_TAG: char = 'B';
    pub const SELL_TAG: char = 'S';

    pub fn from_tag(tag: char) -> Result<Self, EngineError> {
        match tag {
            Self::BUY_TAG => Ok(Self::Buy),
            Self::SELL_TAG => Ok(Self::Sell),
            other => Err(EngineError::UnknownSide(other)),
        }
    }

    pub fn tag(self) -> char {
        match self {
            Self::Buy => Self::BUY_TAG,
            Self::Sell => Self::SELL_TAG,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Whether a resting order at `resting` is acceptable to an incoming
    /// order on this side with limit `limit`.
    pub fn crosses(self, limit: Price, resting: Price) -> bool {
        match self {
            Self::Buy => resting <= limit,
            Self::Sell => resting >= limit,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// Direction of a trader's net position change in a settlement line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Sign {
    Bought,
    Sold,
}

impl Sign {
    pub fn symbol(self) -> char {
        match self {
            Self::Bought => '+',
            Self::Sold => '-',
        }
    }
}

impl From<Side> for Sign {
    fn from(side: Side) -> Self {
        match side {
            Side::Buy => Self::Bought,
            Side::Sell => Self::Sold,
        }
    }
}

/// An order as handed to the engine. The side is still the raw tag from the
/// wire format; the engine resolves it on submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewOrder {
    pub trader: TraderId,
    pub side: char,
    pub quantity: Quantity,
    pub price: Price,
}

impl NewOrder {
    pub fn buy(trader: impl Into<TraderId>, quantity: Quantity, price: Price) -> Self {
        Self {
            trader: trader.into(),
            side: Side::BUY_TAG,
            quantity,
            price,
        }
    }

    pub fn sell(trader: impl Into<TraderId>, quantity: Quantity, price: Price) -> Self {
        Self {
            trader: trader.into(),
            side: Side::SELL_TAG,
            quantity,
            price,
        }
    }

    pub fn side(&self) -> Result<Side, EngineError> {
        Side::from_tag(self.side)
    }
}

impl fmt::Display for NewOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.trader, self.side, self.quantity, self.price)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestingOrder {
    pub trader: TraderId,
    pub side: Side,
    pub quantity: Quantity,
    pub price: Price,
}

/// A single execution between the incoming order and one resting order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Fill {
    pub aggressor: TraderId,
    pub aggressor_side: Side,
    pub passive: TraderId,
    pub price: Price,
    pub quantity: Quantity,
}
