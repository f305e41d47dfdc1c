//! # Ciphers
//!
//! The five classical transforms as pure functions. Substitution ciphers
//! (Atbash, ROT13, Caesar, Affine) map each letter through a
//! [`SubstitutionTable`]; Railfence moves letters without changing them.

pub mod affine;
pub mod atbash;
pub mod caesar;
pub mod railfence;
pub mod rot13;
pub mod substitution;

pub use affine::AffineKey;
pub use substitution::SubstitutionTable;
