// Property-based tests for the rate-application and consolidation math:
// half-up rounding at 2 decimals, compound (piggyback) chaining, and
// order-independent consolidation.

use proptest::prelude::*;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use commercekit::core::money::{percentage_of, round_money};
use commercekit::taxes::models::{TaxItem, TaxRate};
use commercekit::taxes::services::{apply_tax_rates, consolidate_tax_items};

fn rate(code: &str, percent: Decimal, piggyback: bool) -> TaxRate {
    TaxRate {
        id: 0,
        code: code.to_string(),
        rate: percent,
        piggyback,
        priority: 0,
        country_code: "CA".to_string(),
        zone_id: Some(1),
        state_province: None,
        tax_class_code: "DEFAULT".to_string(),
        descriptions: vec![],
    }
}

/// Subtotal in cents, as a 2-decimal amount
fn amount_from_cents(cents: u64) -> Decimal {
    Decimal::new(cents as i64, 2)
}

/// Rate in basis points, as a percentage with 2 decimals (0.00%..=100.00%)
fn percent_from_basis_points(bp: u32) -> Decimal {
    Decimal::new(bp as i64, 2)
}

proptest! {
    #[test]
    fn test_single_rate_matches_half_up_formula(
        cents in 0u64..100_000_000u64,
        bp in 0u32..=10_000u32
    ) {
        let subtotal = amount_from_cents(cents);
        let percent = percent_from_basis_points(bp);

        let items = apply_tax_rates(subtotal, &[rate("R", percent, false)], "en");

        let expected = (subtotal * percent / Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

        prop_assert_eq!(items.len(), 1);
        prop_assert_eq!(items[0].amount, expected);
    }

    #[test]
    fn test_piggyback_chain_matches_formula(
        cents in 1u64..100_000_000u64,
        bp1 in 1u32..=2_000u32,
        bp2 in 1u32..=2_000u32
    ) {
        let subtotal = amount_from_cents(cents);
        let r1 = percent_from_basis_points(bp1);
        let r2 = percent_from_basis_points(bp2);

        let rates = [rate("R1", r1, false), rate("R2", r2, true)];
        let items = apply_tax_rates(subtotal, &rates, "en");

        let tax1 = percentage_of(subtotal, r1);
        let tax2 = percentage_of(subtotal + tax1, r2);

        prop_assert_eq!(items[0].amount, tax1);
        prop_assert_eq!(items[1].amount, tax2);
    }

    #[test]
    fn test_tax_is_non_negative_and_deterministic(
        cents in 0u64..100_000_000u64,
        bp in 0u32..=10_000u32,
        piggyback in any::<bool>()
    ) {
        let subtotal = amount_from_cents(cents);
        let percent = percent_from_basis_points(bp);
        let rates = [rate("R", percent, piggyback)];

        let first = apply_tax_rates(subtotal, &rates, "en");
        let second = apply_tax_rates(subtotal, &rates, "en");

        prop_assert!(first[0].amount >= Decimal::ZERO);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_amounts_always_carry_monetary_scale(
        cents in 0u64..100_000_000u64,
        bp in 0u32..=10_000u32
    ) {
        let subtotal = amount_from_cents(cents);
        let percent = percent_from_basis_points(bp);

        let items = apply_tax_rates(subtotal, &[rate("R", percent, false)], "en");

        prop_assert!(items[0].amount.scale() <= 2);
        prop_assert_eq!(items[0].amount, round_money(items[0].amount));
    }

    #[test]
    fn test_consolidation_is_commutative(
        amounts in proptest::collection::vec(0u64..1_000_000u64, 1..8),
        seed in any::<u64>()
    ) {
        let codes = ["GST", "QST", "HST"];
        let items: Vec<TaxItem> = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| TaxItem {
                code: codes[i % codes.len()].to_string(),
                label: codes[i % codes.len()].to_string(),
                rate: dec!(5),
                amount: amount_from_cents(*cents),
            })
            .collect();

        // Rotate by an arbitrary offset to reorder bucket contributions
        let offset = (seed as usize) % items.len();
        let mut rotated = items.clone();
        rotated.rotate_left(offset);

        prop_assert_eq!(
            consolidate_tax_items(items),
            consolidate_tax_items(rotated)
        );
    }

    #[test]
    fn test_consolidated_total_preserves_sum(
        amounts in proptest::collection::vec(0u64..1_000_000u64, 0..8)
    ) {
        let items: Vec<TaxItem> = amounts
            .iter()
            .enumerate()
            .map(|(i, cents)| TaxItem {
                code: format!("T{}", i % 3),
                label: "T".to_string(),
                rate: dec!(5),
                amount: amount_from_cents(*cents),
            })
            .collect();

        let input_sum: Decimal = items.iter().map(|i| i.amount).sum();
        let consolidated = consolidate_tax_items(items);
        let output_sum: Decimal = consolidated.iter().map(|i| i.amount).sum();

        prop_assert_eq!(input_sum, output_sum);
    }
}

#[test]
fn test_known_half_up_cases() {
    // 0.5 cent midpoints round up, not to even
    assert_eq!(percentage_of(dec!(100.00), dec!(9.975)), dec!(9.98));
    assert_eq!(percentage_of(dec!(105.00), dec!(9.975)), dec!(10.47));
    assert_eq!(percentage_of(dec!(1.00), dec!(0.5)), dec!(0.01));
    assert_eq!(round_money(dec!(2.345)), dec!(2.35));
}

#[test]
fn test_rotation_differs_but_totals_match() {
    let items = vec![
        TaxItem {
            code: "GST".to_string(),
            label: "GST".to_string(),
            rate: dec!(5),
            amount: dec!(5.00),
        },
        TaxItem {
            code: "QST".to_string(),
            label: "QST".to_string(),
            rate: dec!(9.975),
            amount: dec!(10.47),
        },
        TaxItem {
            code: "GST".to_string(),
            label: "GST".to_string(),
            rate: dec!(5),
            amount: dec!(0.38),
        },
    ];
    let mut reversed = items.clone();
    reversed.reverse();

    let forward = consolidate_tax_items(items);
    let backward = consolidate_tax_items(reversed);

    assert_eq!(forward, backward);
    assert_eq!(forward.len(), 2);
    assert_eq!(forward[0].amount, dec!(5.38));
}
