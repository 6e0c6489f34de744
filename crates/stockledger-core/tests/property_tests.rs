//! Property-based tests for stockledger-core.
//!
//! These tests verify engine invariants hold for arbitrary inputs using
//! proptest.
//!
//! Run with: cargo test -p stockledger-core --test `property_tests`

use proptest::prelude::*;
use stockledger_core::{Command, Ledger, Pair, Quantity, Sku};

// ============================================================================
// Arbitrary generators
// ============================================================================

fn arb_sku_token() -> impl Strategy<Value = String> {
    "[A-Z]{1,3}-[0-9]{1,3}"
}

fn arb_amount_token() -> impl Strategy<Value = u32> {
    0u32..=999
}

/// Any whitespace-free token, valid or not.
fn arb_raw_token() -> impl Strategy<Value = String> {
    "[!-~]{0,8}"
}

fn arb_raw_pairs() -> impl Strategy<Value = Vec<Pair>> {
    prop::collection::vec(
        (arb_raw_token(), arb_raw_token()).prop_map(|(sku, amount)| Pair::new(sku, amount)),
        0..6,
    )
}

fn arb_command() -> impl Strategy<Value = Command> {
    prop_oneof![
        arb_raw_pairs().prop_map(Command::SetStock),
        arb_raw_pairs().prop_map(Command::AddStock),
        (arb_raw_token(), arb_raw_pairs()).prop_map(|(reference, pairs)| Command::Order {
            reference,
            pairs
        }),
    ]
}

// ============================================================================
// Engine properties
// ============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// set-stock is idempotent per SKU: applying the same instruction twice
    /// leaves the same table as applying it once.
    #[test]
    fn prop_set_stock_idempotent(sku in arb_sku_token(), amount in arb_amount_token()) {
        let command = Command::SetStock(vec![Pair::new(&sku, amount.to_string())]);

        let mut once = Ledger::new();
        once.apply(&command).unwrap();

        let mut twice = Ledger::new();
        twice.apply(&command).unwrap();
        twice.apply(&command).unwrap();

        prop_assert_eq!(once, twice);
    }

    /// add-stock on an unseeded SKU always fails and never creates the key.
    #[test]
    fn prop_add_stock_never_creates_keys(sku in arb_sku_token(), amount in arb_amount_token()) {
        let mut ledger = Ledger::new();
        let command = Command::AddStock(vec![Pair::new(&sku, amount.to_string())]);

        prop_assert!(ledger.apply(&command).is_err());
        prop_assert!(!ledger.contains(&sku.parse::<Sku>().unwrap()));
        prop_assert!(ledger.is_empty());
    }

    /// order either decrements exactly, or fails leaving the level alone.
    /// Either way no level ever goes negative (underflow is rejected, not
    /// wrapped).
    #[test]
    fn prop_order_never_overdraws(
        sku in arb_sku_token(),
        level in arb_amount_token(),
        requested in arb_amount_token(),
    ) {
        let mut ledger = Ledger::new();
        ledger
            .apply(&Command::SetStock(vec![Pair::new(&sku, level.to_string())]))
            .unwrap();

        let order = Command::Order {
            reference: "ON-1".into(),
            pairs: vec![Pair::new(&sku, requested.to_string())],
        };
        let outcome = ledger.apply(&order);

        let key: Sku = sku.parse().unwrap();
        if requested <= level {
            prop_assert!(outcome.is_ok());
            prop_assert_eq!(ledger.level(&key), Some(Quantity::new(level - requested)));
        } else {
            prop_assert!(outcome.is_err());
            prop_assert_eq!(ledger.level(&key), Some(Quantity::new(level)));
        }
    }

    /// The engine is total over arbitrary token soup: apply never panics,
    /// and every level it ever stores came from a validated token or a sum
    /// of validated tokens.
    #[test]
    fn prop_apply_is_total(commands in prop::collection::vec(arb_command(), 0..12)) {
        let mut ledger = Ledger::new();
        for command in &commands {
            let _ = ledger.apply(command);
        }
        for (sku, _) in ledger.levels() {
            prop_assert!(Sku::is_valid(sku.as_str()));
        }
    }

    /// A freshly set level is always within the parse range.
    #[test]
    fn prop_set_levels_within_parse_range(pairs in arb_raw_pairs()) {
        let mut ledger = Ledger::new();
        ledger.apply(&Command::SetStock(pairs)).unwrap();
        for (_, quantity) in ledger.levels() {
            prop_assert!(quantity <= Quantity::CEILING);
        }
    }
}

// ============================================================================
// Quantity parse properties
// ============================================================================

proptest! {
    /// Whatever parses as a quantity is a digit string within [0, 999].
    #[test]
    fn prop_parsed_quantities_bounded(token in arb_raw_token()) {
        if let Ok(quantity) = token.parse::<Quantity>() {
            prop_assert!(quantity.get() <= 999);
            prop_assert!(token.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    /// Parsing round-trips through Display for the canonical form.
    #[test]
    fn prop_quantity_display_round_trip(amount in arb_amount_token()) {
        let quantity: Quantity = amount.to_string().parse().unwrap();
        prop_assert_eq!(quantity.to_string().parse::<Quantity>().unwrap(), quantity);
    }
}
