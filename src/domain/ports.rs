use super::payment::PaymentMethod;
use crate::error::Result;

/// Destination for the human-readable lines a shop produces.
///
/// Orders, recipes and payment confirmations never print directly; they emit
/// one line at a time to a sink, so a console and a test recorder are
/// interchangeable.
pub trait OutputSink {
    fn emit(&mut self, line: &str) -> Result<()>;
}

pub type PaymentMethodBox = Box<dyn PaymentMethod + Send + Sync>;
