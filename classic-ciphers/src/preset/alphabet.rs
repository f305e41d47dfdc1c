use lazy_static::lazy_static;
use std::collections::HashMap;

/// The ROT13 substitution key: the plain alphabet rotated by 13.
pub const ROT13_KEY: &str = "NOPQRSTUVWXYZABCDEFGHIJKLM";

lazy_static! {
    /// `A..=Z`, indexed by letter position.
    pub static ref UPPERCASE_ALPHABET: Vec<char> = ('A'..='Z').collect();

    /// `a..=z`, indexed by letter position.
    pub static ref LOWERCASE_ALPHABET: Vec<char> = ('a'..='z').collect();

    /// The plain alphabet reversed, used by Atbash.
    pub static ref REVERSED_ALPHABET: Vec<char> =
        UPPERCASE_ALPHABET.iter().rev().copied().collect();

    /// A static HashMap mapping every Latin letter, in either case, to its
    /// position (0 to 25).
    pub static ref CHAR_TO_INDEX_MAP: HashMap<char, usize> = {
        let mut map = HashMap::new();

        let pairs = UPPERCASE_ALPHABET.iter().zip(LOWERCASE_ALPHABET.iter());
        for (index, (&upper, &lower)) in pairs.enumerate() {
            map.insert(upper, index);
            map.insert(lower, index);
        }

        map
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterCase {
    Upper,
    Lower,
}

impl LetterCase {
    /// Renders the letter at `position` (0 to 25) in this case.
    pub fn letter(self, position: usize) -> char {
        match self {
            LetterCase::Upper => UPPERCASE_ALPHABET[position],
            LetterCase::Lower => LOWERCASE_ALPHABET[position],
        }
    }
}

/// A single input character after classification against the Latin alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Letter { position: usize, case: LetterCase },
    Other(char),
}

/// Classifies `ch` as an upper-case letter, a lower-case letter or anything else.
///
/// Only the 26 ASCII Latin letters count as letters; accented or non-Latin
/// alphabetic characters are `Other`.
pub fn classify(ch: char) -> Glyph {
    match CHAR_TO_INDEX_MAP.get(&ch) {
        Some(&position) if ch.is_ascii_uppercase() => Glyph::Letter {
            position,
            case: LetterCase::Upper,
        },
        Some(&position) => Glyph::Letter {
            position,
            case: LetterCase::Lower,
        },
        None => Glyph::Other(ch),
    }
}

/// Position of every letter of `key` in the plain alphabet.
///
/// Characters outside the alphabet are skipped, so callers only pass
/// permutations of `A..=Z`.
pub fn positions_of(key: impl IntoIterator<Item = char>) -> Vec<usize> {
    key.into_iter()
        .filter_map(|ch| CHAR_TO_INDEX_MAP.get(&ch).copied())
        .collect()
}
