use coffee_shop::application::order_service::OrderService;
use coffee_shop::domain::beverage::Beverage;
use coffee_shop::infrastructure::in_memory::InMemorySink;

/// Places a single order and returns every line it emitted.
pub fn order_lines(shop: &OrderService, beverage: &dyn Beverage) -> Vec<String> {
    let mut sink = InMemorySink::new();
    shop.place_order(beverage, &mut sink)
        .expect("in-memory sink never fails");
    sink.into_lines()
}
