//! `SeaORM` entity definitions.

pub mod prelude;

pub mod clients;
pub mod mortgages;
