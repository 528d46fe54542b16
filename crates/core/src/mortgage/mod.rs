//! Fixed-rate mortgage amortization.

pub mod calculator;
pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use calculator::{MONTHS_PER_YEAR, MortgageCalculator, compute_quote};
pub use error::CalculationError;
pub use types::{MortgageQuote, MortgageTerms};
