use coffee_shop::domain::amount::Amount;
use coffee_shop::domain::beverage::{Beverage, Espresso, Latte};
use coffee_shop::domain::payment::{Card, Cash, PaymentMethod};
use coffee_shop::domain::size::Size;
use rand::Rng;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

const SIZES: [Size; 3] = [Size::Small, Size::Medium, Size::Large];

#[test]
fn test_price_is_base_times_multiplier() {
    let mut rng = rand::thread_rng();

    for _ in 0..1_000 {
        let base = Decimal::new(rng.gen_range(1..100_000), 2);
        let size = SIZES[rng.gen_range(0..SIZES.len())];

        let latte = Latte::with_size(base, size).unwrap();
        assert_eq!(latte.price().value(), base * size.multiplier());

        let espresso = Espresso::new(base).unwrap();
        assert_eq!(espresso.size(), Size::Small);
        assert_eq!(espresso.price().value(), base);
    }
}

#[test]
fn test_cash_confirmation_matches_amount_in_cents() {
    let mut rng = rand::thread_rng();

    for _ in 0..200 {
        let amount = Amount::new(Decimal::new(rng.gen_range(1..1_000_000), 4)).unwrap();
        let line = Cash.confirmation(amount);

        let shown = line
            .strip_prefix("Paid $")
            .and_then(|rest| rest.strip_suffix(" in cash"))
            .unwrap();
        let (_, decimals) = shown.split_once('.').unwrap();
        assert_eq!(decimals.len(), 2, "unexpected amount in {line:?}");

        let expected = amount
            .value()
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        assert_eq!(shown.parse::<Decimal>().unwrap(), expected, "in {line:?}");
    }
}

#[test]
fn test_confirmations_round_half_away_from_zero() {
    let cases = [
        (dec!(1.999), "2.00"),
        (dec!(2.675), "2.68"),
        (dec!(2.674), "2.67"),
        (dec!(0.0675), "0.07"),
        (dec!(4.05), "4.05"),
    ];

    for (value, shown) in cases {
        let amount = Amount::new(value).unwrap();
        assert_eq!(Cash.confirmation(amount), format!("Paid ${shown} in cash"));
        assert_eq!(
            Card::new("1277448787638764").unwrap().confirmation(amount),
            format!("Charged ${shown} to card ending with 8764")
        );
    }
}

#[test]
fn test_card_confirmation_shows_exactly_last_four() {
    let amount = Amount::new(dec!(4.05)).unwrap();
    for number in ["1234", "12345", "1277448787638764", "xxxx-xxxx-9981"] {
        let card = Card::new(number).unwrap();
        let line = card.confirmation(amount);
        let shown = line.rsplit(' ').next().unwrap();

        assert_eq!(shown, &number[number.len() - 4..]);
        assert!(line.contains("$4.05"));
    }
}

#[test]
fn test_scenario_prices() {
    assert_eq!(Espresso::new(dec!(2.00)).unwrap().price().value(), dec!(2.00));
    assert_eq!(Latte::new(dec!(3.00)).unwrap().price().value(), dec!(4.05));
    assert_eq!(Latte::new(dec!(3.00)).unwrap().size(), Size::Medium);
}
