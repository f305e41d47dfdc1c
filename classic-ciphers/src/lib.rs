//! Classical text ciphers: Atbash, ROT13, Caesar, Affine and Railfence.
//!
//! Every cipher works over the 26-letter Latin alphabet and is a pure,
//! reversible transform. This is not cryptography in the modern sense.
//!
//! ```
//! use classic_ciphers::{CaseMode, CipherEngine};
//!
//! let engine = CipherEngine::default();
//! let secret = engine.affine_encrypt("Cipher Time", 5, 5, CaseMode::Sensitive).unwrap();
//! assert_eq!(secret, "Ptcozm Wtnz");
//! assert_eq!(
//!     engine.affine_decrypt(&secret, 5, 5, CaseMode::Sensitive).unwrap(),
//!     "Cipher Time"
//! );
//! ```

pub mod ciphers;
pub mod config;
pub mod diagnostics;
pub mod engine;
pub mod errors;
pub mod params;
pub mod preset;
pub mod ring;

pub use config::EngineConfig;
pub use diagnostics::{CipherEvent, CipherFailure, CipherObserver, LogObserver, NoopObserver};
pub use engine::CipherEngine;
pub use errors::CipherError;
pub use params::{CaseMode, CipherKind, CipherParameters, NonLetterPolicy, Operation};
pub use ring::{modular_multiplicative_inverse, wrap_mod};
