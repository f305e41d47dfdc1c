//! Atbash: letter `i` becomes letter `25 - i`.
//!
//! The mapping is its own inverse, so [`encrypt`] and [`decrypt`] produce the
//! same output. Non-letters, spaces included, are removed.

use crate::ciphers::SubstitutionTable;
use crate::errors::CipherError;
use crate::params::{CaseMode, NonLetterPolicy, Operation};
use crate::preset::alphabet::{REVERSED_ALPHABET, positions_of};

use lazy_static::lazy_static;

lazy_static! {
    static ref ATBASH_TABLE: SubstitutionTable = {
        let positions = positions_of(REVERSED_ALPHABET.iter().copied());
        SubstitutionTable::from_fn(|p| positions[p])
    };
}

/// Applies Atbash to `message`. Encryption and decryption are the same operation.
pub fn transform(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    encrypt(message, case_mode, policy)
}

pub fn encrypt(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    ATBASH_TABLE.apply(Operation::Encrypt, message, case_mode, policy, false)
}

pub fn decrypt(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    ATBASH_TABLE.apply(Operation::Decrypt, message, case_mode, policy, false)
}
