//! Railfence (zig-zag) transposition.
//!
//! The letters of the message are written diagonally across `rails` rows,
//! bouncing between the top and bottom row, and then read row by row.
//! Letters keep their case (or are upper-cased in case-insensitive mode);
//! non-letters are removed before the zig-zag.

use crate::ciphers::substitution::substitute;
use crate::errors::CipherError;
use crate::params::{CaseMode, NonLetterPolicy};

use num_integer::Integer;

/// Yields the row visited at each step of the zig-zag:
/// `0, 1, .., rails-1, rails-2, .., 1, 0, 1, ..`.
///
/// With a single rail every step stays on row 0.
#[derive(Debug, Clone)]
pub struct ZigZag {
    rails: usize,
    row: usize,
    descending: bool,
}

impl ZigZag {
    pub fn new(rails: usize) -> Self {
        Self {
            rails,
            row: 0,
            descending: true,
        }
    }
}

impl Iterator for ZigZag {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.row;
        if self.rails > 1 {
            if self.row == 0 {
                self.descending = true;
            } else if self.row == self.rails - 1 {
                self.descending = false;
            }
            self.row = if self.descending {
                self.row + 1
            } else {
                self.row - 1
            };
        }
        Some(current)
    }
}

/// Number of characters each row receives when `len` characters are written over `rails` rows.
///
/// A full period of the zig-zag is `2 * (rails - 1)` steps; it visits the top
/// and bottom rows once and every interior row twice.
pub fn rail_lengths(len: usize, rails: usize) -> Vec<usize> {
    if rails <= 1 {
        return vec![len; rails];
    }

    let period = 2 * (rails - 1);
    let (full_periods, remainder) = len.div_rem(&period);

    (0..rails)
        .map(|row| {
            let boundary = row == 0 || row == rails - 1;
            let mut count = if boundary { full_periods } else { 2 * full_periods };
            // within a period, row r is visited at steps r and period - r
            if row < remainder {
                count += 1;
            }
            if !boundary && period - row < remainder {
                count += 1;
            }
            count
        })
        .collect()
}

fn validate_rails(rails: usize) -> Result<(), CipherError> {
    if rails == 0 {
        return Err(CipherError::InvalidParameter(
            "Railfence needs at least 1 rail, got 0".to_string(),
        ));
    }
    Ok(())
}

/// Strips non-letters and applies the case mode.
fn prepare(
    message: &str,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<Vec<char>, CipherError> {
    Ok(substitute(message, case_mode, policy, false, |p| p)?.chars().collect())
}

pub fn encrypt(
    message: &str,
    rails: usize,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    validate_rails(rails)?;
    let letters = prepare(message, case_mode, policy)?;

    let mut rows: Vec<String> = vec![String::new(); rails];
    for (ch, row) in letters.into_iter().zip(ZigZag::new(rails)) {
        rows[row].push(ch);
    }

    Ok(rows.concat())
}

pub fn decrypt(
    message: &str,
    rails: usize,
    case_mode: CaseMode,
    policy: NonLetterPolicy,
) -> Result<String, CipherError> {
    validate_rails(rails)?;
    let letters = prepare(message, case_mode, policy)?;

    // slice the ciphertext into one contiguous chunk per row
    let mut rest = letters.as_slice();
    let mut rows: Vec<std::slice::Iter<'_, char>> = Vec::with_capacity(rails);
    for len in rail_lengths(letters.len(), rails) {
        let (row, tail) = rest.split_at(len);
        rows.push(row.iter());
        rest = tail;
    }

    Ok(ZigZag::new(rails)
        .take(letters.len())
        .filter_map(|row| rows[row].next())
        .collect())
}
