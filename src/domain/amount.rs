use crate::error::ShopError;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a positive monetary amount: a base price or a computed price.
///
/// This is a wrapper around `rust_decimal::Decimal` so prices never go through
/// floating point and can never be zero or negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, ShopError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(ShopError::InvalidPrice(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// Scales the amount by a size multiplier.
    ///
    /// Fails with `InvalidPrice` when the product overflows or is not positive.
    pub fn scale(self, multiplier: Decimal) -> Result<Self, ShopError> {
        match self.0.checked_mul(multiplier) {
            Some(value) => Self::new(value),
            None => Err(ShopError::InvalidPrice(self.0)),
        }
    }

    /// The value rounded half away from zero to whole cents.
    pub fn rounded(&self) -> Decimal {
        self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = ShopError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

/// Formats to exactly 2 decimal places, rounding half away from zero,
/// e.g. `4.05`, `0.0675` -> `0.07`.
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.rounded())
    }
}
