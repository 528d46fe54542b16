//! Common types used across the application.

pub mod money;

pub use money::{CURRENCY_DECIMAL_PLACES, MAX_STORED_AMOUNT, is_storable_amount, round_currency};
