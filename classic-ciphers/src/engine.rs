use crate::ciphers::{AffineKey, atbash, caesar, railfence, rot13};
use crate::config::EngineConfig;
use crate::diagnostics::{CipherEvent, CipherFailure, CipherObserver, LogObserver};
use crate::errors::CipherError;
use crate::params::{CaseMode, CipherParameters, Operation};

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Entry point for all ciphers.
///
/// Holds no state between calls apart from its configuration, so one engine
/// can be shared across threads.
#[derive(Clone)]
pub struct CipherEngine {
    config: EngineConfig,
    observer: Arc<dyn CipherObserver>,
}

impl Default for CipherEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl std::fmt::Debug for CipherEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CipherEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CipherEngine {
    /// Creates an engine that reports diagnostics through the `log` facade.
    pub fn new(config: EngineConfig) -> Self {
        let observer = Arc::new(LogObserver::new(config.tag.clone()));
        Self { config, observer }
    }

    /// Creates an engine that reports diagnostics to `observer`.
    ///
    /// The observer is only called when `config.enable_diagnostics` is set.
    pub fn with_observer(config: EngineConfig, observer: Arc<dyn CipherObserver>) -> Self {
        Self { config, observer }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs one cipher in one direction.
    pub fn apply(
        &self,
        operation: Operation,
        parameters: &CipherParameters,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        let result = self.transform(operation, parameters, message, case_mode);

        if self.config.enable_diagnostics {
            // an observer panic stays here; the caller still gets the result
            let reported = panic::catch_unwind(AssertUnwindSafe(|| {
                self.report(operation, parameters, message, case_mode, &result)
            }));
            if reported.is_err() {
                log::error!(
                    "{} Diagnostics observer panicked while reporting {} {}",
                    self.config.tag,
                    parameters.kind(),
                    operation
                );
            }
        }

        result.map(|(output, _)| output)
    }

    fn report(
        &self,
        operation: Operation,
        parameters: &CipherParameters,
        message: &str,
        case_mode: CaseMode,
        result: &Result<(String, Option<String>), CipherError>,
    ) {
        match result {
            Ok((output, cipher_alphabet)) => self.observer.notify(&CipherEvent {
                cipher: parameters.kind(),
                operation,
                input: message.to_string(),
                parameters: *parameters,
                case_mode,
                output: output.clone(),
                cipher_alphabet: cipher_alphabet.clone(),
            }),
            Err(e) => self.observer.notify_error(&CipherFailure {
                cipher: parameters.kind(),
                operation,
                input: message.to_string(),
                parameters: *parameters,
                case_mode,
                error: e.to_string(),
            }),
        }
    }

    /// Returns the output and, for Affine, the cipher alphabet it was built from.
    fn transform(
        &self,
        operation: Operation,
        parameters: &CipherParameters,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<(String, Option<String>), CipherError> {
        let policy = self.config.non_letter_policy;

        let output = match (*parameters, operation) {
            (CipherParameters::Atbash, Operation::Encrypt) => {
                atbash::encrypt(message, case_mode, policy)?
            }
            (CipherParameters::Atbash, Operation::Decrypt) => {
                atbash::decrypt(message, case_mode, policy)?
            }
            (CipherParameters::Rot13, Operation::Encrypt) => {
                rot13::encrypt(message, case_mode, policy)?
            }
            (CipherParameters::Rot13, Operation::Decrypt) => {
                rot13::decrypt(message, case_mode, policy)?
            }
            (CipherParameters::Caesar { key, subtract }, Operation::Encrypt) => {
                caesar::encrypt(message, key, subtract, case_mode, policy)?
            }
            (CipherParameters::Caesar { key, subtract }, Operation::Decrypt) => {
                caesar::decrypt(message, key, subtract, case_mode, policy)?
            }
            (CipherParameters::Affine { multiplier, offset }, operation) => {
                let key = AffineKey::try_with(multiplier, offset)?;
                let output = match operation {
                    Operation::Encrypt => key.encrypt(message, case_mode, policy)?,
                    Operation::Decrypt => key.decrypt(message, case_mode, policy)?,
                };
                return Ok((output, Some(key.cipher_alphabet())));
            }
            (CipherParameters::Railfence { rails }, Operation::Encrypt) => {
                railfence::encrypt(message, rails, case_mode, policy)?
            }
            (CipherParameters::Railfence { rails }, Operation::Decrypt) => {
                railfence::decrypt(message, rails, case_mode, policy)?
            }
        };

        Ok((output, None))
    }

    pub fn encrypt(
        &self,
        parameters: &CipherParameters,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.apply(Operation::Encrypt, parameters, message, case_mode)
    }

    pub fn decrypt(
        &self,
        parameters: &CipherParameters,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.apply(Operation::Decrypt, parameters, message, case_mode)
    }

    /// Atbash is its own inverse; this is the same as [`Self::atbash_encrypt`].
    pub fn atbash_transform(
        &self,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.atbash_encrypt(message, case_mode)
    }

    pub fn atbash_encrypt(
        &self,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.encrypt(&CipherParameters::Atbash, message, case_mode)
    }

    pub fn atbash_decrypt(
        &self,
        message: &str,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.decrypt(&CipherParameters::Atbash, message, case_mode)
    }

    pub fn rot13_encrypt(&self, message: &str, case_mode: CaseMode) -> Result<String, CipherError> {
        self.encrypt(&CipherParameters::Rot13, message, case_mode)
    }

    pub fn rot13_decrypt(&self, message: &str, case_mode: CaseMode) -> Result<String, CipherError> {
        self.decrypt(&CipherParameters::Rot13, message, case_mode)
    }

    /// Shifts every letter by `key`, backwards when `subtract` is set.
    ///
    /// # Errors
    ///
    /// `CipherError::InvalidParameter` for a negative key.
    pub fn caesar_encrypt(
        &self,
        message: &str,
        key: i64,
        subtract: bool,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.encrypt(&CipherParameters::Caesar { key, subtract }, message, case_mode)
    }

    /// Applies the same shift as [`Self::caesar_encrypt`]. To undo an
    /// encryption pass the opposite `subtract` flag.
    pub fn caesar_decrypt(
        &self,
        message: &str,
        key: i64,
        subtract: bool,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.decrypt(&CipherParameters::Caesar { key, subtract }, message, case_mode)
    }

    /// # Errors
    ///
    /// `CipherError::InvalidParameter` if `multiplier` is not coprime with 26.
    pub fn affine_encrypt(
        &self,
        message: &str,
        multiplier: i64,
        offset: i64,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.encrypt(&CipherParameters::Affine { multiplier, offset }, message, case_mode)
    }

    pub fn affine_decrypt(
        &self,
        message: &str,
        multiplier: i64,
        offset: i64,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.decrypt(&CipherParameters::Affine { multiplier, offset }, message, case_mode)
    }

    /// # Errors
    ///
    /// `CipherError::InvalidParameter` if `rails` is 0.
    pub fn railfence_encrypt(
        &self,
        message: &str,
        rails: usize,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.encrypt(&CipherParameters::Railfence { rails }, message, case_mode)
    }

    pub fn railfence_decrypt(
        &self,
        message: &str,
        rails: usize,
        case_mode: CaseMode,
    ) -> Result<String, CipherError> {
        self.decrypt(&CipherParameters::Railfence { rails }, message, case_mode)
    }
}
