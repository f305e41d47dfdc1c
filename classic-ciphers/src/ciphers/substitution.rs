use crate::errors::CipherError;
use crate::params::{CaseMode, NonLetterPolicy, Operation};
use crate::preset::alphabet::{Glyph, UPPERCASE_ALPHABET, classify};
use crate::ring::ALPHABET_LEN;

const LEN: usize = ALPHABET_LEN as usize;

/// A permutation of letter positions together with its inverse.
///
/// `forward[p]` is the position of the cipher letter for plain position `p`;
/// `reverse` undoes it, so decryption never searches the cipher alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubstitutionTable {
    forward: [usize; LEN],
    reverse: [usize; LEN],
}

impl SubstitutionTable {
    /// Builds the table from a position mapping. `map` must be a bijection on `0..26`.
    pub(crate) fn from_fn(map: impl Fn(usize) -> usize) -> Self {
        let mut forward = [0; LEN];
        let mut reverse = [0; LEN];
        for (plain, slot) in forward.iter_mut().enumerate() {
            let cipher = map(plain) % LEN;
            *slot = cipher;
            reverse[cipher] = plain;
        }

        Self { forward, reverse }
    }

    pub fn encrypt_position(&self, position: usize) -> usize {
        self.forward[position]
    }

    pub fn decrypt_position(&self, position: usize) -> usize {
        self.reverse[position]
    }

    pub fn position(&self, operation: Operation, position: usize) -> usize {
        match operation {
            Operation::Encrypt => self.encrypt_position(position),
            Operation::Decrypt => self.decrypt_position(position),
        }
    }

    /// The upper-case cipher alphabet, e.g. `NOPQRSTUVWXYZABCDEFGHIJKLM` for ROT13.
    pub fn cipher_alphabet(&self) -> String {
        self.forward.iter().map(|&p| UPPERCASE_ALPHABET[p]).collect()
    }

    /// Runs `message` through the table in the given direction.
    pub fn apply(
        &self,
        operation: Operation,
        message: &str,
        case_mode: CaseMode,
        policy: NonLetterPolicy,
        keep_non_letters: bool,
    ) -> Result<String, CipherError> {
        substitute(message, case_mode, policy, keep_non_letters, |p| {
            self.position(operation, p)
        })
    }
}

/// Maps every letter of `message` through `map`, preserving or forcing its case.
///
/// Non-letters are checked against `policy`, then copied through when
/// `keep_non_letters` is set and dropped otherwise.
pub(crate) fn substitute(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
    keep_non_letters: bool,
    map: impl Fn(usize) -> usize,
) -> Result<String, CipherError> {
    let mut output = String::with_capacity(message.len());

    for (index, ch) in message.chars().enumerate() {
        match classify(ch) {
            Glyph::Letter { position, case } => {
                output.push(case_mode.apply(case).letter(map(position)));
            }
            Glyph::Other(other) => {
                policy.admit(other, index)?;
                if keep_non_letters {
                    output.push(other);
                }
            }
        }
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::CaseMode::{Insensitive, Sensitive};
    use crate::params::NonLetterPolicy::{Lenient, Strict};

    #[test]
    fn test_identity_table() {
        let table = SubstitutionTable::from_fn(|p| p);
        assert_eq!(table.cipher_alphabet(), "ABCDEFGHIJKLMNOPQRSTUVWXYZ");
        assert_eq!(table.encrypt_position(4), 4);
    }

    #[test]
    fn test_reverse_undoes_forward() {
        let table = SubstitutionTable::from_fn(|p| (p * 7 + 3) % 26);
        for p in 0..26 {
            assert_eq!(table.decrypt_position(table.encrypt_position(p)), p);
        }
    }

    #[test]
    fn test_substitute_keeps_or_strips() -> Result<(), CipherError> {
        let shift = |p: usize| (p + 1) % 26;
        let kept = substitute("Ab z!", Sensitive, Lenient, true, shift)?;
        assert_eq!(kept, "Bc a!");

        let stripped = substitute("Ab z!", Insensitive, Lenient, false, shift)?;
        assert_eq!(stripped, "BCA");
        Ok(())
    }

    #[test]
    fn test_substitute_strict_rejects_punctuation() {
        let result = substitute("Hi there!", Sensitive, Strict, true, |p| p);
        assert!(matches!(
            result,
            Err(CipherError::OutOfAlphabetCharacter {
                character: '!',
                position: 8
            })
        ));
    }
}
