//! Property-based tests for the mortgage calculator.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::calculator::{MortgageCalculator, compute_quote};
use super::types::MortgageTerms;

/// Capital from 1,000.00 to 1,000,000.00.
fn capital() -> impl Strategy<Value = Decimal> {
    (100_000i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Positive annual rate from 0.50% to 15.00%.
fn positive_rate() -> impl Strategy<Value = Decimal> {
    (50i64..=1_500i64).prop_map(|bp| Decimal::new(bp, 2))
}

/// Whole-year terms from 1 to 40.
fn whole_years() -> impl Strategy<Value = Decimal> {
    (1i64..=40i64).prop_map(Decimal::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Identical inputs give identical outputs.
    #[test]
    fn prop_compute_is_deterministic(
        capital in capital(),
        rate in positive_rate(),
        years in whole_years(),
    ) {
        let terms = MortgageTerms::new(capital, rate, years);
        let first = MortgageCalculator::compute(&terms).unwrap();
        let second = MortgageCalculator::compute(&terms).unwrap();

        prop_assert_eq!(first, second);
        prop_assert_eq!(first.monthly_payment.serialize(), second.monthly_payment.serialize());
        prop_assert_eq!(first.total_amount.serialize(), second.total_amount.serialize());
    }

    /// With a positive rate, the borrower repays more than the capital.
    #[test]
    fn prop_positive_rate_adds_interest(
        capital in capital(),
        rate in positive_rate(),
        years in whole_years(),
    ) {
        let quote = compute_quote(capital, rate, years).unwrap();

        prop_assert!(quote.monthly_payment > Decimal::ZERO);
        prop_assert!(quote.total_amount > capital);
    }

    /// At zero rate the payment is capital / n and the total is the capital.
    #[test]
    fn prop_zero_rate_is_straight_division(capital in capital(), years in whole_years()) {
        let quote = compute_quote(capital, Decimal::ZERO, years).unwrap();
        let installments = years * dec!(12);

        prop_assert_eq!(
            quote.monthly_payment,
            (capital / installments).round_dp_with_strategy(
                2,
                rust_decimal::RoundingStrategy::MidpointNearestEven,
            )
        );
        prop_assert!((quote.total_amount - capital).abs() <= dec!(0.01));
    }

    /// Outputs never carry more than two decimal places.
    #[test]
    fn prop_outputs_have_currency_precision(
        capital in capital(),
        rate in positive_rate(),
        years in whole_years(),
    ) {
        let quote = compute_quote(capital, rate, years).unwrap();

        prop_assert!(quote.monthly_payment.scale() <= 2);
        prop_assert!(quote.total_amount.scale() <= 2);
    }

    /// A higher rate never lowers the monthly payment.
    #[test]
    fn prop_payment_monotonic_in_rate(
        capital in capital(),
        rate in positive_rate(),
        years in whole_years(),
    ) {
        let lower = compute_quote(capital, rate, years).unwrap();
        let higher = compute_quote(capital, rate + dec!(1), years).unwrap();

        prop_assert!(higher.monthly_payment >= lower.monthly_payment);
    }

    /// Total repaid stays within rounding of payment * n.
    #[test]
    fn prop_total_matches_payment_times_installments(
        capital in capital(),
        rate in positive_rate(),
        years in whole_years(),
    ) {
        let quote = compute_quote(capital, rate, years).unwrap();
        let installments = years * dec!(12);
        let approx_total = quote.monthly_payment * installments;

        // Rounding the payment moves the product by at most 0.005 per installment.
        prop_assert!((quote.total_amount - approx_total).abs() <= installments * dec!(0.005) + dec!(0.01));
    }
}
