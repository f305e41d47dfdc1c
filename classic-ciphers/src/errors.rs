#[derive(thiserror::Error, Debug)]
pub enum CipherError {
    /// A cipher parameter is outside its accepted range (negative Caesar key,
    /// non-coprime Affine multiplier, zero rails).
    #[error("InvalidParameter: {0}")]
    InvalidParameter(String),
    /// Raised under the strict character policy for anything that is neither a
    /// Latin letter nor a space.
    #[error("Character {character:?} at position {position} is not in the Latin alphabet")]
    OutOfAlphabetCharacter { character: char, position: usize },

    /// Error when trying to find a modular inverse that doesn't exist (gcd(a, m) != 1).
    #[error("NoInverse: {0}")]
    NoInverse(String),

    #[error("Data serialization: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_parameter() {
        let err = CipherError::InvalidParameter("Caesar key cannot be negative, got -1".into());
        assert_eq!(
            err.to_string(),
            "InvalidParameter: Caesar key cannot be negative, got -1"
        );
    }

    #[test]
    fn test_display_out_of_alphabet() {
        let err = CipherError::OutOfAlphabetCharacter {
            character: '!',
            position: 5,
        };
        assert_eq!(
            err.to_string(),
            "Character '!' at position 5 is not in the Latin alphabet"
        );
    }

    #[test]
    fn test_serialization_error_from_json() {
        let parse: Result<serde_json::Value, _> = serde_json::from_str("{not json");
        let err: CipherError = parse.unwrap_err().into();
        assert!(matches!(err, CipherError::SerializationError(_)));
    }
}
