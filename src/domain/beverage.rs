use super::amount::Amount;
use super::ports::OutputSink;
use super::size::Size;
use crate::error::Result;
use rust_decimal::Decimal;

/// Name, base price and size shared by every beverage.
///
/// Variants embed a `Recipe` and expose it through [`Beverage::recipe`]. The
/// sized price is computed once here, so no variant can change the formula and
/// pricing a built beverage cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    name: String,
    base_price: Amount,
    size: Size,
    price: Amount,
}

impl Recipe {
    /// Fails with `InvalidPrice` when `base_price` is zero, negative, or too
    /// large to be scaled by the size multiplier.
    pub fn new(name: impl Into<String>, base_price: Decimal, size: Size) -> Result<Self> {
        let base_price = Amount::new(base_price)?;
        let price = base_price.scale(size.multiplier())?;
        Ok(Self {
            name: name.into(),
            base_price,
            size,
            price,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_price(&self) -> Amount {
        self.base_price
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Base price times the size multiplier.
    pub fn price(&self) -> Amount {
        self.price
    }
}

/// An orderable item.
///
/// Implementors provide their [`Recipe`] and, optionally, their own
/// preparation steps. Everything else is derived here.
pub trait Beverage {
    fn recipe(&self) -> &Recipe;

    fn name(&self) -> &str {
        self.recipe().name()
    }

    fn size(&self) -> Size {
        self.recipe().size()
    }

    /// Base price times the size multiplier.
    fn price(&self) -> Amount {
        self.recipe().price()
    }

    /// Ordered, human-readable preparation steps.
    fn preparation_steps(&self) -> Vec<String> {
        vec![format!("Preparing a {} {}...", self.size(), self.name())]
    }

    fn prepare(&self, sink: &mut dyn OutputSink) -> Result<()> {
        for step in self.preparation_steps() {
            sink.emit(&step)?;
        }
        Ok(())
    }
}

/// A single shot, always served small.
#[derive(Debug, Clone, PartialEq)]
pub struct Espresso {
    recipe: Recipe,
}

impl Espresso {
    pub fn new(base_price: Decimal) -> Result<Self> {
        Ok(Self {
            recipe: Recipe::new("Espresso", base_price, Size::Small)?,
        })
    }
}

impl Beverage for Espresso {
    fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    fn preparation_steps(&self) -> Vec<String> {
        vec![
            "Grinding coffee beans...".to_string(),
            "Brewing a shot of espresso...".to_string(),
            "Pouring into a small cup.".to_string(),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Latte {
    recipe: Recipe,
}

impl Latte {
    /// A medium latte.
    pub fn new(base_price: Decimal) -> Result<Self> {
        Self::with_size(base_price, Size::default())
    }

    pub fn with_size(base_price: Decimal, size: Size) -> Result<Self> {
        Ok(Self {
            recipe: Recipe::new("Latte", base_price, size)?,
        })
    }
}

impl Beverage for Latte {
    fn recipe(&self) -> &Recipe {
        &self.recipe
    }

    fn preparation_steps(&self) -> Vec<String> {
        vec![
            "Steaming milk...".to_string(),
            "Grinding coffee beans...".to_string(),
            "Brewing a shot of espresso...".to_string(),
            "Combining espresso with milk and adding foam.".to_string(),
            format!("Pouring into a {} cup.", self.size()),
        ]
    }
}
