//! Caesar shift: every letter moves `key` places forward, or backward when
//! `subtract` is set, wrapping around the alphabet.
//!
//! Decryption is the same shift; callers undo an encryption by flipping
//! `subtract`. Non-letters keep their place in the output.

use crate::ciphers::SubstitutionTable;
use crate::errors::CipherError;
use crate::params::{CaseMode, NonLetterPolicy, Operation};
use crate::ring::Ring;

/// Builds the shifted alphabet for `key`.
///
/// # Errors
///
/// Returns `CipherError::InvalidParameter` for a negative key.
pub fn shift_table(key: i64, subtract: bool) -> Result<SubstitutionTable, CipherError> {
    if key < 0 {
        return Err(CipherError::InvalidParameter(format!(
            "Caesar key cannot be negative, got {}. Set `subtract` to shift backwards",
            key
        )));
    }

    let ring = Ring::alphabet();
    Ok(SubstitutionTable::from_fn(|p| {
        let shifted = if subtract {
            ring.sub(p as i64, key)
        } else {
            ring.add(p as i64, key)
        };
        shifted as usize
    }))
}

pub fn encrypt(
    message: &str,
    key: i64,
    subtract: bool,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    shift_table(key, subtract)?.apply(Operation::Encrypt, message, case_mode, policy, true)
}

/// Same shift as [`encrypt`]; pass the opposite `subtract` flag to reverse an encryption.
pub fn decrypt(
    message: &str,
    key: i64,
    subtract: bool,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    encrypt(message, key, subtract, case_mode, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CaseMode::{Insensitive, Sensitive};
    use crate::params::NonLetterPolicy::Lenient;

    use quickcheck::TestResult;
    use quickcheck::quickcheck;

    #[test]
    fn test_hello() -> Result<(), CipherError> {
        assert_eq!(encrypt("HELLO", 8, false, Insensitive, Lenient)?, "PMTTW");
        assert_eq!(encrypt("HeLlO", 8, false, Sensitive, Lenient)?, "PmTtW");
        assert_eq!(decrypt("Pmttw", 8, true, Insensitive, Lenient)?, "HELLO");
        Ok(())
    }

    #[test]
    fn test_subtract_wraps_below_a() -> Result<(), CipherError> {
        assert_eq!(encrypt("ABC", 3, true, Sensitive, Lenient)?, "XYZ");
        assert_eq!(
            decrypt("RIDZWQOHS ZSHHSFG OFS TIB HC RSQFMDH", 14, true, Insensitive, Lenient)?,
            "DUPLICATE LETTERS ARE FUN TO DECRYPT"
        );
        Ok(())
    }

    #[test]
    fn test_large_keys_reduce_mod_26() -> Result<(), CipherError> {
        let small = encrypt("Attack at dawn", 3, false, Sensitive, Lenient)?;
        let large = encrypt("Attack at dawn", 3 + 26 * 1000, false, Sensitive, Lenient)?;
        assert_eq!(small, "Dwwdfn dw gdzq");
        assert_eq!(small, large);
        assert_eq!(encrypt("Zz", i64::MAX, true, Sensitive, Lenient)?, "Ss");
        Ok(())
    }

    #[test]
    fn test_negative_key_is_rejected() {
        let result = encrypt("HELLO", -1, false, Insensitive, Lenient);
        assert!(matches!(result, Err(CipherError::InvalidParameter(_))));
        assert!(decrypt("HELLO", -5, true, Insensitive, Lenient).is_err());
    }

    #[test]
    fn test_non_letters_pass_through() -> Result<(), CipherError> {
        assert_eq!(
            encrypt("Meet @ 10:30, gate B", 1, false, Sensitive, Lenient)?,
            "Nffu @ 10:30, hbuf C"
        );
        Ok(())
    }

    quickcheck! {
        fn prop_round_trip(message: String, key: u16) -> TestResult {
            let key = key as i64;
            let exact = encrypt(&message, key, false, Sensitive, Lenient)
                .and_then(|c| decrypt(&c, key, true, Sensitive, Lenient));
            let upper = encrypt(&message, key, true, Insensitive, Lenient)
                .and_then(|c| decrypt(&c, key, false, Insensitive, Lenient));

            match (exact, upper) {
                (Ok(exact), Ok(upper)) => TestResult::from_bool(
                    exact == message && upper == message.to_ascii_uppercase(),
                ),
                (Err(e), _) | (_, Err(e)) => TestResult::error(e.to_string()),
            }
        }
    }
}
