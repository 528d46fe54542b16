//! Mortgage domain types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Inputs to an amortization quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageTerms {
    /// Principal borrowed.
    pub requested_capital: Decimal,
    /// Annual nominal rate as a percentage (3.5 means 3.5%).
    pub annual_rate_percent: Decimal,
    /// Repayment term in years. Fractional years are allowed.
    pub term_years: Decimal,
}

impl MortgageTerms {
    /// Creates a new set of terms.
    #[must_use]
    pub const fn new(
        requested_capital: Decimal,
        annual_rate_percent: Decimal,
        term_years: Decimal,
    ) -> Self {
        Self {
            requested_capital,
            annual_rate_percent,
            term_years,
        }
    }
}

/// Result of an amortization quote, rounded to currency precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MortgageQuote {
    /// Fixed monthly installment.
    pub monthly_payment: Decimal,
    /// Sum of all installments.
    pub total_amount: Decimal,
}

impl MortgageQuote {
    /// Interest paid over the life of the loan.
    #[must_use]
    pub fn total_interest(&self, requested_capital: Decimal) -> Decimal {
        self.total_amount - requested_capital
    }
}
