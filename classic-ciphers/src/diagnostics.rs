//! Optional reporting of every transform the engine performs.
//!
//! The engine hands a [`CipherEvent`] to its [`CipherObserver`] after a
//! successful transform and a [`CipherFailure`] after a rejected one. Observers
//! return nothing, so they cannot alter what the caller receives.

use crate::params::{CaseMode, CipherKind, CipherParameters, Operation};

use serde::Serialize;

use std::fmt;

/// Receives diagnostics from a [`CipherEngine`](crate::CipherEngine).
pub trait CipherObserver: Send + Sync {
    fn notify(&self, event: &CipherEvent);

    fn notify_error(&self, failure: &CipherFailure);
}

/// A transform that completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherEvent {
    pub cipher: CipherKind,
    pub operation: Operation,
    pub input: String,
    pub parameters: CipherParameters,
    pub case_mode: CaseMode,
    pub output: String,
    /// The derived cipher alphabet, for Affine.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_alphabet: Option<String>,
}

impl fmt::Display for CipherEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} \"{}\" using {}",
            self.operation.progressive(),
            self.input,
            self.cipher
        )?;

        match self.parameters {
            CipherParameters::Caesar { key, subtract } => {
                let sign = if subtract { '-' } else { '+' };
                write!(f, ". Each letter will be shifted by {}{}", sign, key)?;
            }
            CipherParameters::Affine { multiplier, offset } => {
                write!(f, " where a = {} and b = {}", multiplier, offset)?;
                if let Some(alphabet) = &self.cipher_alphabet {
                    write!(f, ". The cipher alphabet that has been created is {}", alphabet)?;
                }
            }
            CipherParameters::Railfence { rails } => write!(f, " over {} rails", rails)?,
            CipherParameters::Atbash | CipherParameters::Rot13 => {}
        }

        write!(
            f,
            ". The message to be returned will be {}. The {} output is \"{}\".",
            self.case_mode,
            self.operation.past(),
            self.output
        )
    }
}

/// A transform that was rejected before producing output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherFailure {
    pub cipher: CipherKind,
    pub operation: Operation,
    pub input: String,
    pub parameters: CipherParameters,
    pub case_mode: CaseMode,
    pub error: String,
}

impl fmt::Display for CipherFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unable to {} \"{}\" using {}, an error has occurred: {}.",
            self.operation, self.input, self.cipher, self.error
        )
    }
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl CipherObserver for NoopObserver {
    fn notify(&self, _event: &CipherEvent) {}

    fn notify_error(&self, _failure: &CipherFailure) {}
}

/// Writes events to the `log` facade, each line prefixed with `tag`.
#[derive(Debug, Clone)]
pub struct LogObserver {
    tag: String,
}

impl LogObserver {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }
}

impl CipherObserver for LogObserver {
    fn notify(&self, event: &CipherEvent) {
        log::info!("{} {}", self.tag, event);
    }

    fn notify_error(&self, failure: &CipherFailure) {
        log::error!("{} {}", self.tag, failure);
    }
}
