//! National identity (DNI) validation.

pub mod dni;

#[cfg(test)]
mod props;

pub use dni::{DNI_LENGTH, Dni, DniError, LETTER_TABLE, control_letter, validate_dni};
