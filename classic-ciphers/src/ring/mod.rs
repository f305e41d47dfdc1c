//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing the finite ring Z_26 used by the
//! shift and affine ciphers, plus the free-standing [`wrap_mod`] and
//! [`modular_multiplicative_inverse`] helpers.

pub mod math;

pub use math::{Ring, modular_multiplicative_inverse, wrap_mod};

/// Size of the Latin alphabet, the modulus every letter cipher works in.
pub const ALPHABET_LEN: u64 = 26;
