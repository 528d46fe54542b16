//! DNI parsing and control-letter checksum.
//!
//! A DNI is 8 decimal digits followed by a control letter. The letter is
//! `LETTER_TABLE[number % 23]`, where `number` is the 8 digits read as an
//! unsigned integer. The comparison is case-sensitive.

use std::fmt;
use std::str::FromStr;

use hipoteca_shared::AppError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Exact length of a DNI, in characters.
pub const DNI_LENGTH: usize = 9;

/// Number of leading digits in a DNI.
const DIGIT_COUNT: usize = 8;

/// Control letters indexed by `number % 23`.
pub const LETTER_TABLE: [char; 23] = [
    'T', 'R', 'W', 'A', 'G', 'M', 'Y', 'F', 'P', 'D', 'X', 'B', 'N', 'J', 'Z', 'S', 'Q', 'V', 'H',
    'L', 'C', 'K', 'E',
];

/// Reasons a DNI is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DniError {
    /// Input is not exactly nine characters long.
    #[error("DNI must be exactly 9 characters, got {0}")]
    InvalidLength(usize),

    /// Digits or trailing letter are missing.
    #[error(
        "The first 8 characters of DNI must be numbers and the last character must be a letter"
    )]
    InvalidStructure,

    /// Control letter does not match the digits.
    #[error("The DNI's format is incorrect")]
    ChecksumMismatch {
        /// Letter the digits call for.
        expected: char,
        /// Letter that was supplied.
        found: char,
    },
}

impl From<DniError> for AppError {
    fn from(err: DniError) -> Self {
        Self::InvalidFormat(err.to_string())
    }
}

/// Returns the control letter for an 8-digit DNI number.
#[must_use]
pub const fn control_letter(number: u32) -> char {
    LETTER_TABLE[(number % 23) as usize]
}

/// Validates a DNI and returns it unchanged on success.
///
/// # Errors
///
/// Returns `DniError` if the code is not 9 characters, the first 8 are not
/// all ASCII digits, the last is not alphabetic, or the control letter does
/// not match.
pub fn validate_dni(code: &str) -> Result<Dni, DniError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != DNI_LENGTH {
        return Err(DniError::InvalidLength(chars.len()));
    }

    let (digits, letter) = chars.split_at(DIGIT_COUNT);
    let letter = letter[0];
    if !digits.iter().all(char::is_ascii_digit) || !letter.is_alphabetic() {
        return Err(DniError::InvalidStructure);
    }

    let number = digits
        .iter()
        .fold(0u32, |acc, d| acc * 10 + d.to_digit(10).unwrap_or(0));
    let expected = control_letter(number);
    if letter != expected {
        return Err(DniError::ChecksumMismatch {
            expected,
            found: letter,
        });
    }

    Ok(Dni(code.to_owned()))
}

/// A DNI whose control letter has been verified.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Dni(String);

impl Dni {
    /// Parses and validates a DNI.
    ///
    /// # Errors
    ///
    /// See [`validate_dni`].
    pub fn parse(code: &str) -> Result<Self, DniError> {
        validate_dni(code)
    }

    /// Returns the DNI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl FromStr for Dni {
    type Err = DniError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_dni(s)
    }
}

impl TryFrom<String> for Dni {
    type Error = DniError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        validate_dni(&value)
    }
}

impl From<Dni> for String {
    fn from(dni: Dni) -> Self {
        dni.0
    }
}

impl AsRef<str> for Dni {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Dni {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
