use crate::errors::CipherError;
use crate::preset::alphabet::LetterCase;

use serde::{Deserialize, Serialize};

use std::fmt;

/// Whether output letters are forced to upper case or keep the case of the input letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// Every output letter is upper case.
    Insensitive,
    /// Every output letter has the case of the letter it came from.
    Sensitive,
}

impl CaseMode {
    /// Maps the `caseInsensitive` style flag onto a mode.
    pub fn from_case_insensitive(case_insensitive: bool) -> Self {
        if case_insensitive {
            CaseMode::Insensitive
        } else {
            CaseMode::Sensitive
        }
    }

    pub fn is_insensitive(self) -> bool {
        self == CaseMode::Insensitive
    }

    /// The case an output letter takes, given the case of its source letter.
    pub fn apply(self, source: LetterCase) -> LetterCase {
        match self {
            CaseMode::Insensitive => LetterCase::Upper,
            CaseMode::Sensitive => source,
        }
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseMode::Insensitive => write!(f, "case-insensitive"),
            CaseMode::Sensitive => write!(f, "case-sensitive"),
        }
    }
}

/// What happens to characters outside `A..=Z` / `a..=z`.
///
/// Under either policy ROT13, Caesar and Affine copy spaces through while
/// Atbash and Railfence drop them. The policies differ on every other non-letter:
/// `Lenient` treats it like a space, `Strict` rejects the message.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonLetterPolicy {
    #[default]
    Lenient,
    Strict,
}

impl NonLetterPolicy {
    /// Checks a non-letter found at char index `position`.
    pub fn admit(self, character: char, position: usize) -> Result<(), CipherError> {
        match self {
            NonLetterPolicy::Strict if character != ' ' => {
                Err(CipherError::OutOfAlphabetCharacter {
                    character,
                    position,
                })
            }
            _ => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherKind {
    Atbash,
    Rot13,
    Caesar,
    Affine,
    Railfence,
}

impl fmt::Display for CipherKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CipherKind::Atbash => "Atbash",
            CipherKind::Rot13 => "ROT13",
            CipherKind::Caesar => "Caesar",
            CipherKind::Affine => "Affine",
            CipherKind::Railfence => "Railfence",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Encrypt,
    Decrypt,
}

impl Operation {
    /// "Encrypting" / "Decrypting".
    pub fn progressive(self) -> &'static str {
        match self {
            Operation::Encrypt => "Encrypting",
            Operation::Decrypt => "Decrypting",
        }
    }

    /// "encrypted" / "decrypted".
    pub fn past(self) -> &'static str {
        match self {
            Operation::Encrypt => "encrypted",
            Operation::Decrypt => "decrypted",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Encrypt => write!(f, "encrypt"),
            Operation::Decrypt => write!(f, "decrypt"),
        }
    }
}

/// Per-cipher configuration of a single transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CipherParameters {
    Atbash,
    Rot13,
    /// `key` must be non-negative; `subtract` shifts backwards.
    Caesar { key: i64, subtract: bool },
    /// `multiplier` must be coprime with 26.
    Affine { multiplier: i64, offset: i64 },
    /// `rails` must be at least 1; a single rail leaves the text in place.
    Railfence { rails: usize },
}

impl CipherParameters {
    pub fn kind(&self) -> CipherKind {
        match self {
            CipherParameters::Atbash => CipherKind::Atbash,
            CipherParameters::Rot13 => CipherKind::Rot13,
            CipherParameters::Caesar { .. } => CipherKind::Caesar,
            CipherParameters::Affine { .. } => CipherKind::Affine,
            CipherParameters::Railfence { .. } => CipherKind::Railfence,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_mode_flag() {
        assert_eq!(CaseMode::from_case_insensitive(true), CaseMode::Insensitive);
        assert_eq!(CaseMode::from_case_insensitive(false), CaseMode::Sensitive);
        assert!(CaseMode::from_case_insensitive(true).is_insensitive());
        assert!(!CaseMode::Sensitive.is_insensitive());
        assert_eq!(CaseMode::Insensitive.apply(LetterCase::Lower), LetterCase::Upper);
        assert_eq!(CaseMode::Sensitive.apply(LetterCase::Lower), LetterCase::Lower);
        assert_eq!(CaseMode::Insensitive.to_string(), "case-insensitive");
    }

    #[test]
    fn test_strict_policy_admits_only_spaces() {
        assert!(NonLetterPolicy::Strict.admit(' ', 0).is_ok());
        assert!(matches!(
            NonLetterPolicy::Strict.admit('!', 3),
            Err(CipherError::OutOfAlphabetCharacter {
                character: '!',
                position: 3
            })
        ));
        assert!(NonLetterPolicy::Lenient.admit('!', 3).is_ok());
    }

    #[test]
    fn test_parameters_json_shape() -> Result<(), CipherError> {
        let caesar = CipherParameters::Caesar {
            key: 8,
            subtract: false,
        };
        let json = serde_json::to_string(&caesar)?;
        assert_eq!(json, r#"{"caesar":{"key":8,"subtract":false}}"#);
        assert_eq!(serde_json::from_str::<CipherParameters>(&json)?, caesar);

        let atbash: CipherParameters = serde_json::from_str(r#""atbash""#)?;
        assert_eq!(atbash.kind(), CipherKind::Atbash);
        Ok(())
    }

    #[test]
    fn test_display_names() {
        assert_eq!(CipherKind::Rot13.to_string(), "ROT13");
        assert_eq!(Operation::Decrypt.to_string(), "decrypt");
        assert_eq!(Operation::Decrypt.progressive(), "Decrypting");
    }
}
