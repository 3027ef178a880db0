use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShopError {
    #[error("Invalid price: {0} (must be positive)")]
    InvalidPrice(Decimal),
    #[error("Invalid card identifier: expected at least 4 characters, got {length}")]
    InvalidCardIdentifier { length: usize },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ShopError>;
