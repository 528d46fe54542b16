//! Property-based tests for DNI validation.

use proptest::prelude::*;

use super::dni::{DniError, LETTER_TABLE, control_letter, validate_dni};

/// Strategy for any 8-digit DNI number, including leading zeros.
fn dni_number() -> impl Strategy<Value = u32> {
    0u32..100_000_000
}

/// Strategy for an uppercase ASCII letter.
fn ascii_letter() -> impl Strategy<Value = char> {
    (b'A'..=b'Z').prop_map(char::from)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// A code built with its own control letter validates and comes back unchanged.
    #[test]
    fn prop_correct_letter_validates(number in dni_number()) {
        let code = format!("{number:08}{}", control_letter(number));
        let result = validate_dni(&code);
        prop_assert!(result.is_ok(), "{} should validate", code);
        let dni = result.unwrap();
        prop_assert_eq!(dni.as_str(), code.as_str());
    }

    /// Any other letter is rejected as a checksum mismatch.
    #[test]
    fn prop_other_letter_rejected(number in dni_number(), letter in ascii_letter()) {
        let expected = control_letter(number);
        prop_assume!(letter != expected);

        let code = format!("{number:08}{letter}");
        prop_assert_eq!(
            validate_dni(&code),
            Err(DniError::ChecksumMismatch { expected, found: letter })
        );
    }

    /// Anything not exactly nine characters is rejected.
    #[test]
    fn prop_wrong_length_rejected(code in "[0-9A-Z]{0,20}") {
        prop_assume!(code.chars().count() != 9);
        prop_assert!(matches!(validate_dni(&code), Err(DniError::InvalidLength(_))));
    }

    /// A non-digit anywhere in the first eight positions is rejected.
    #[test]
    fn prop_non_digit_prefix_rejected(
        number in dni_number(),
        position in 0usize..8,
        intruder in "[A-Za-z ./-]",
    ) {
        let mut chars: Vec<char> = format!("{number:08}").chars().collect();
        chars[position] = intruder.chars().next().unwrap();
        chars.push(control_letter(number));
        let code: String = chars.into_iter().collect();

        prop_assert_eq!(validate_dni(&code), Err(DniError::InvalidStructure));
    }

    /// A non-alphabetic ninth character is rejected.
    #[test]
    fn prop_non_alphabetic_suffix_rejected(number in dni_number(), suffix in "[0-9 ./#-]") {
        let code = format!("{number:08}{suffix}");
        prop_assert_eq!(validate_dni(&code), Err(DniError::InvalidStructure));
    }

    /// The control letter is always drawn from the table.
    #[test]
    fn prop_control_letter_in_table(number in any::<u32>()) {
        prop_assert!(LETTER_TABLE.contains(&control_letter(number)));
    }
}
