//! Amortization formula.
//!
//! ```text
//! n       = term_years * 12
//! i       = annual_rate_percent / 1200
//! payment = capital * i / (1 - (1 + i)^-n)
//! total   = payment * n
//! ```
//!
//! With `i = 0` the payment is `capital / n`. All arithmetic is decimal and
//! results are rounded to two places only at the end.

use hipoteca_shared::types::round_currency;
use rust_decimal::{Decimal, MathematicalOps};

use super::error::CalculationError;
use super::types::{MortgageQuote, MortgageTerms};

/// Installments per year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Converts an annual percentage into a monthly fraction.
const PERCENT_MONTHS: Decimal = Decimal::from_parts(1200, 0, 0, false, 0);

/// Stateless amortization calculator.
pub struct MortgageCalculator;

impl MortgageCalculator {
    /// Computes the monthly payment and total repayment for the given terms.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if capital or term is not positive, the
    /// rate is negative, or an intermediate value overflows.
    pub fn compute(terms: &MortgageTerms) -> Result<MortgageQuote, CalculationError> {
        Self::check_preconditions(terms)?;

        let installments = Self::installments(terms.term_years)?;
        let monthly_rate = Self::monthly_rate(terms.annual_rate_percent);

        let monthly_payment = if monthly_rate.is_zero() {
            terms
                .requested_capital
                .checked_div(installments)
                .ok_or(CalculationError::Overflow)?
        } else {
            Self::annuity_payment(terms.requested_capital, monthly_rate, installments)?
        };

        let total_amount = monthly_payment
            .checked_mul(installments)
            .ok_or(CalculationError::Overflow)?;

        Ok(MortgageQuote {
            monthly_payment: round_currency(monthly_payment),
            total_amount: round_currency(total_amount),
        })
    }

    /// Number of monthly installments, `term_years * 12`.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError::Overflow` if the product does not fit.
    pub fn installments(term_years: Decimal) -> Result<Decimal, CalculationError> {
        term_years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or(CalculationError::Overflow)
    }

    /// Monthly fractional rate, `annual_rate_percent / 1200`.
    #[must_use]
    pub fn monthly_rate(annual_rate_percent: Decimal) -> Decimal {
        annual_rate_percent / PERCENT_MONTHS
    }

    fn check_preconditions(terms: &MortgageTerms) -> Result<(), CalculationError> {
        if terms.requested_capital <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveCapital(terms.requested_capital));
        }
        if terms.annual_rate_percent < Decimal::ZERO {
            return Err(CalculationError::NegativeRate(terms.annual_rate_percent));
        }
        if terms.term_years <= Decimal::ZERO {
            return Err(CalculationError::NonPositiveTerm(terms.term_years));
        }
        Ok(())
    }

    /// `capital * i / (1 - 1 / (1 + i)^n)`; `n` may be fractional.
    fn annuity_payment(
        capital: Decimal,
        monthly_rate: Decimal,
        installments: Decimal,
    ) -> Result<Decimal, CalculationError> {
        let discount = match (Decimal::ONE + monthly_rate).checked_powd(installments) {
            Some(growth) => Decimal::ONE
                .checked_div(growth)
                .ok_or(CalculationError::Overflow)?,
            // (1 + i)^n beyond Decimal::MAX puts (1 + i)^-n below the smallest step.
            None => Decimal::ZERO,
        };
        let denominator = Decimal::ONE - discount;
        if denominator <= Decimal::ZERO {
            return Err(CalculationError::Overflow);
        }

        capital
            .checked_mul(monthly_rate)
            .and_then(|interest| interest.checked_div(denominator))
            .ok_or(CalculationError::Overflow)
    }
}

/// Convenience wrapper over [`MortgageCalculator::compute`].
///
/// # Errors
///
/// See [`MortgageCalculator::compute`].
pub fn compute_quote(
    requested_capital: Decimal,
    annual_rate_percent: Decimal,
    term_years: Decimal,
) -> Result<MortgageQuote, CalculationError> {
    MortgageCalculator::compute(&MortgageTerms::new(
        requested_capital,
        annual_rate_percent,
        term_years,
    ))
}
