//! ROT13: substitution against the fixed key `NOPQRSTUVWXYZABCDEFGHIJKLM`.
//!
//! Spaces and other non-letters keep their place in the output.

use crate::ciphers::SubstitutionTable;
use crate::errors::CipherError;
use crate::params::{CaseMode, NonLetterPolicy, Operation};
use crate::preset::alphabet::{ROT13_KEY, positions_of};

use lazy_static::lazy_static;

lazy_static! {
    static ref ROT13_TABLE: SubstitutionTable = {
        let positions = positions_of(ROT13_KEY.chars());
        SubstitutionTable::from_fn(|p| positions[p])
    };
}

pub fn encrypt(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    ROT13_TABLE.apply(Operation::Encrypt, message, case_mode, policy, true)
}

pub fn decrypt(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    ROT13_TABLE.apply(Operation::Decrypt, message, case_mode, policy, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CaseMode::{Insensitive, Sensitive};
    use crate::params::NonLetterPolicy::{Lenient, Strict};

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_hello() -> Result<(), CipherError> {
        assert_eq!(encrypt("HELLO", Insensitive, Lenient)?, "URYYB");
        assert_eq!(encrypt("HeLlO", Sensitive, Lenient)?, "UrYyB");
        assert_eq!(decrypt("Uryyb", Insensitive, Lenient)?, "HELLO");
        Ok(())
    }

    #[test]
    fn test_key_matches_table() {
        assert_eq!(ROT13_TABLE.cipher_alphabet(), ROT13_KEY);
    }

    #[test]
    fn test_spaces_and_punctuation_pass_through() -> Result<(), CipherError> {
        assert_eq!(
            encrypt("Why did the chicken cross the road?", Sensitive, Lenient)?,
            "Jul qvq gur puvpxra pebff gur ebnq?"
        );
        assert!(encrypt("road?", Sensitive, Strict).is_err());
        assert_eq!(encrypt("a b", Sensitive, Strict)?, "n o");
        Ok(())
    }

    quickcheck! {
        fn prop_round_trip(message: String) -> TestResult {
            let exact = encrypt(&message, Sensitive, Lenient)
                .and_then(|c| decrypt(&c, Sensitive, Lenient));
            let upper = encrypt(&message, Insensitive, Lenient)
                .and_then(|c| decrypt(&c, Insensitive, Lenient));

            match (exact, upper) {
                (Ok(exact), Ok(upper)) => TestResult::from_bool(
                    exact == message && upper == message.to_ascii_uppercase(),
                ),
                (Err(e), _) | (_, Err(e)) => TestResult::error(e.to_string()),
            }
        }

        fn prop_self_inverse(message: String) -> TestResult {
            match encrypt(&message, Sensitive, Lenient)
                .and_then(|c| encrypt(&c, Sensitive, Lenient))
            {
                Ok(twice) => TestResult::from_bool(twice == message),
                Err(e) => TestResult::error(e.to_string()),
            }
        }
    }
}
