use crate::domain::beverage::Beverage;
use crate::domain::ports::{OutputSink, PaymentMethodBox};
use crate::error::Result;
use log::{debug, info};

/// Takes orders for one shop.
///
/// `OrderService` owns exactly one payment method for its whole lifetime and
/// only talks to beverages and payments through their traits, so new variants
/// of either plug in without touching this type.
pub struct OrderService {
    shop_name: String,
    payment: PaymentMethodBox,
}

impl OrderService {
    /// Creates a new `OrderService` instance.
    ///
    /// # Arguments
    ///
    /// * `shop_name` - Name used in the welcome line.
    /// * `payment` - How every order placed here is settled.
    pub fn new(shop_name: impl Into<String>, payment: PaymentMethodBox) -> Self {
        Self {
            shop_name: shop_name.into(),
            payment,
        }
    }

    pub fn shop_name(&self) -> &str {
        &self.shop_name
    }

    /// Places a single order.
    ///
    /// Emits the welcome line, the order summary, the beverage's preparation
    /// steps, the payment confirmation and the thank-you line, in that order.
    /// Nothing is remembered between calls.
    pub fn place_order(&self, beverage: &dyn Beverage, sink: &mut dyn OutputSink) -> Result<()> {
        let price = beverage.price();
        debug!(
            "[{}] order received: {} {} at {}",
            self.shop_name,
            beverage.size(),
            beverage.name(),
            price
        );

        sink.emit(&format!("Welcome to {}!", self.shop_name))?;
        sink.emit(&format!(
            "Order: {} {} - ${}",
            beverage.size(),
            beverage.name(),
            price
        ))?;

        beverage.prepare(sink)?;
        debug!("[{}] {} prepared", self.shop_name, beverage.name());

        self.payment.settle(price, sink)?;
        sink.emit("Thank you for your purchase!")?;

        info!(
            "[{}] order completed: {} for {}",
            self.shop_name,
            beverage.name(),
            price
        );
        Ok(())
    }
}
