use super::amount::Amount;
use super::ports::OutputSink;
use crate::error::{Result, ShopError};

/// A way to settle the amount due for an order.
pub trait PaymentMethod {
    /// The confirmation line for settling `amount`.
    fn confirmation(&self, amount: Amount) -> String;

    fn settle(&self, amount: Amount, sink: &mut dyn OutputSink) -> Result<()> {
        sink.emit(&self.confirmation(amount))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cash;

impl PaymentMethod for Cash {
    fn confirmation(&self, amount: Amount) -> String {
        format!("Paid ${amount} in cash")
    }
}

/// Card payment. Only the last 4 characters of the identifier are ever shown.
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    number: String,
}

impl Card {
    pub const VISIBLE_DIGITS: usize = 4;

    /// Fails with `InvalidCardIdentifier` when `number` has fewer than 4 characters.
    pub fn new(number: impl Into<String>) -> Result<Self> {
        let number = number.into();
        let length = number.chars().count();
        if length < Self::VISIBLE_DIGITS {
            return Err(ShopError::InvalidCardIdentifier { length });
        }
        Ok(Self { number })
    }

    pub fn last_four(&self) -> &str {
        let skip = self.number.chars().count() - Self::VISIBLE_DIGITS;
        match self.number.char_indices().nth(skip) {
            Some((start, _)) => &self.number[start..],
            None => &self.number,
        }
    }
}

impl PaymentMethod for Card {
    fn confirmation(&self, amount: Amount) -> String {
        format!("Charged ${amount} to card ending with {}", self.last_four())
    }
}
