//! Currency amounts with decimal precision.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` end to end and are rounded only
//! when they leave a calculation.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for every stored currency amount.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Largest amount that fits a `NUMERIC(10,2)` column (99,999,999.99).
pub const MAX_STORED_AMOUNT: Decimal = Decimal::from_parts(1_410_065_407, 2, 0, false, 2);

/// Rounds an amount to currency precision using banker's rounding.
///
/// 2.345 rounds to 2.34 and 2.355 rounds to 2.36.
#[must_use]
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven)
}

/// Returns true if the amount has no more than two decimal places of
/// significant digits and fits the storage column.
#[must_use]
pub fn is_storable_amount(amount: Decimal) -> bool {
    amount.abs() <= MAX_STORED_AMOUNT && round_currency(amount) == amount
}
