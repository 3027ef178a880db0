use clap::Parser;
use coffee_shop::application::order_service::OrderService;
use coffee_shop::domain::beverage::{Beverage, Espresso, Latte};
use coffee_shop::domain::payment::{Card, Cash};
use coffee_shop::infrastructure::console::ConsoleSink;
use log::LevelFilter;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use simple_logger::SimpleLogger;
use std::io;

const OLD_SHOP: &str = "Ye Olde Coffee";
const NEW_SHOP: &str = "Ye New Coffee";
const ESPRESSO_PRICE: Decimal = dec!(2.00);
const LATTE_PRICE: Decimal = dec!(3.00);
const CARD_NUMBER: &str = "1277448787638764";

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log each order step to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    SimpleLogger::new().with_level(level).init().into_diagnostic()?;

    let espresso = Espresso::new(ESPRESSO_PRICE).into_diagnostic()?;
    let latte = Latte::new(LATTE_PRICE).into_diagnostic()?;

    let old_shop = OrderService::new(OLD_SHOP, Box::new(Cash));
    let new_shop = OrderService::new(NEW_SHOP, Box::new(Card::new(CARD_NUMBER).into_diagnostic()?));

    let orders = [
        (&old_shop, &espresso as &dyn Beverage),
        (&new_shop, &latte as &dyn Beverage),
    ];

    let stdout = io::stdout();
    let mut sink = ConsoleSink::new(stdout.lock());
    for (shop, beverage) in orders {
        shop.place_order(beverage, &mut sink).into_diagnostic()?;
        sink.separator().into_diagnostic()?;
    }

    Ok(())
}
