use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("unknown side tag {0:?}")]
    UnknownSide(char),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("input line is empty")]
    Empty,
    #[error("missing {0} field")]
    MissingField(&'static str),
    #[error("invalid trader identifier {0:?}")]
    InvalidTrader(String),
    #[error("invalid side {0:?}")]
    InvalidSide(String),
    #[error("invalid quantity {0:?}")]
    InvalidQuantity(String),
    #[error("invalid price {0:?}")]
    InvalidPrice(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
