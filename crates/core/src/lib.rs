//! Core business logic for Hipoteca.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//!
//! # Modules
//!
//! - `identity` - DNI checksum validation
//! - `mortgage` - Fixed-rate amortization quotes

pub mod identity;
pub mod mortgage;

pub use identity::{Dni, DniError, validate_dni};
pub use mortgage::{CalculationError, MortgageCalculator, MortgageQuote, MortgageTerms};
