//! Parser for the line format `<trader> <side> <quantity> <price>`,
//! e.g. `T1 B 5 30`.
//!
//! Only the shape of the side tag is checked here (one ASCII letter); the
//! engine decides which letters are actual sides.

use crate::error::ParseError;
use crate::types::NewOrder;

pub fn parse_line(line: &str) -> Result<NewOrder, ParseError> {
    let mut fields = line.split_whitespace();

    let trader = fields.next().ok_or(ParseError::Empty)?;
    if !trader.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ParseError::InvalidTrader(trader.to_string()));
    }

    let side = fields.next().ok_or(ParseError::MissingField("side"))?;
    let side = match side.chars().collect::<Vec<_>>().as_slice() {
        [tag] if tag.is_ascii_alphabetic() => *tag,
        _ => return Err(ParseError::InvalidSide(side.to_string())),
    };

    let quantity = fields.next().ok_or(ParseError::MissingField("quantity"))?;
    let quantity =
        parse_unsigned(quantity).ok_or_else(|| ParseError::InvalidQuantity(quantity.to_string()))?;

    let price = fields.next().ok_or(ParseError::MissingField("price"))?;
    let price = parse_unsigned(price).ok_or_else(|| ParseError::InvalidPrice(price.to_string()))?;

    let rest: Vec<&str> = fields.collect();
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput(rest.join(" ")));
    }

    Ok(NewOrder {
        trader: trader.to_string(),
        side,
        quantity,
        price,
    })
}

// `u64::from_str` also takes a leading `+`, which the format does not allow.
fn parse_unsigned(token: &str) -> Option<u64> {
    if token.bytes().all(|b| b.is_ascii_digit()) {
        token.parse().ok()
    } else {
        None
    }
}
