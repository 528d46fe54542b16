//! Mortgage calculation error types.

use hipoteca_shared::AppError;
use rust_decimal::Decimal;
use thiserror::Error;

/// Reasons a quote cannot be computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalculationError {
    /// Requested capital must be strictly positive.
    #[error("Requested capital must be greater than zero, got {0}")]
    NonPositiveCapital(Decimal),

    /// Annual rate cannot be negative.
    #[error("Annual rate (TAE) cannot be negative, got {0}")]
    NegativeRate(Decimal),

    /// Repayment term must be strictly positive.
    #[error("Repayment term must be greater than zero, got {0}")]
    NonPositiveTerm(Decimal),

    /// Intermediate value exceeded decimal range.
    #[error("Mortgage amounts are out of range")]
    Overflow,
}

impl From<CalculationError> for AppError {
    fn from(err: CalculationError) -> Self {
        Self::Validation(err.to_string())
    }
}
