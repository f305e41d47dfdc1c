//! Affine cipher: plain position `x` becomes `(a·x + b) mod 26`.
//!
//! Decryption looks letters up in the reverse of the same table instead of
//! evaluating `a⁻¹·(y − b) mod 26`; both give the same answer.

use crate::ciphers::SubstitutionTable;
use crate::errors::CipherError;
use crate::params::{CaseMode, NonLetterPolicy, Operation};
use crate::ring::Ring;

use itertools::Itertools;

/// Every multiplier in `1..26` that is coprime with 26.
pub const VALID_MULTIPLIERS: [i64; 12] = [1, 3, 5, 7, 9, 11, 15, 17, 19, 21, 23, 25];

/// A validated `(a, b)` pair and the cipher alphabet it produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffineKey {
    multiplier: i64,
    offset: i64,
    inverse_multiplier: i64,
    table: SubstitutionTable,
}

impl AffineKey {
    /// Validates `multiplier` and builds the cipher alphabet.
    ///
    /// `offset` may be any integer; it is reduced mod 26.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::InvalidParameter` if `multiplier` is not one of
    /// [`VALID_MULTIPLIERS`].
    pub fn try_with(multiplier: i64, offset: i64) -> Result<Self, CipherError> {
        if !VALID_MULTIPLIERS.contains(&multiplier) {
            return Err(CipherError::InvalidParameter(format!(
                "Affine multiplier cannot be {}. Use one of the following: {}",
                multiplier,
                VALID_MULTIPLIERS.iter().join(", ")
            )));
        }

        let ring = Ring::alphabet();
        let inverse_multiplier = ring.inv(multiplier)?;

        // cipher[i] = (a*i + b) mod m
        let table = SubstitutionTable::from_fn(|i| {
            let shifted = ring.add(ring.mul(multiplier, i as i64), offset);
            shifted as usize
        });

        Ok(Self {
            multiplier,
            offset,
            inverse_multiplier,
            table,
        })
    }

    pub fn multiplier(&self) -> i64 {
        self.multiplier
    }

    pub fn offset(&self) -> i64 {
        self.offset
    }

    /// `a⁻¹ mod 26`.
    pub fn inverse_multiplier(&self) -> i64 {
        self.inverse_multiplier
    }

    pub fn cipher_alphabet(&self) -> String {
        self.table.cipher_alphabet()
    }

    pub fn encrypt_position(&self, position: usize) -> usize {
        self.table.encrypt_position(position)
    }

    pub fn decrypt_position(&self, position: usize) -> usize {
        self.table.decrypt_position(position)
    }

    pub fn encrypt(
        &self,
        message: &str,
        case_mode: CaseMode,
        policy: NonLetterPolicy,
    ) -> Result<String, CipherError> {
        self.table.apply(Operation::Encrypt, message, case_mode, policy, true)
    }

    pub fn decrypt(
        &self,
        message: &str,
        case_mode: CaseMode,
        policy: NonLetterPolicy,
    ) -> Result<String, CipherError> {
        self.table.apply(Operation::Decrypt, message, case_mode, policy, true)
    }
}

pub fn encrypt(
    message: &str,
    multiplier: i64,
    offset: i64,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    AffineKey::try_with(multiplier, offset)?.encrypt(message, case_mode, policy)
}

pub fn decrypt(
    message: &str,
    multiplier: i64,
    offset: i64,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    AffineKey::try_with(multiplier, offset)?.decrypt(message, case_mode, policy)
}
