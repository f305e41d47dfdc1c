use crate::errors::CipherError;
use crate::params::NonLetterPolicy;

use serde::{Deserialize, Serialize};

/// Prefix of every diagnostic line unless configured otherwise.
pub const DEFAULT_TAG: &str = "{Cipher Output}";

/// Options of a [`CipherEngine`](crate::CipherEngine).
///
/// Missing JSON fields fall back to their defaults:
///
/// ```
/// # use classic_ciphers::EngineConfig;
/// let config = EngineConfig::from_json(r#"{ "enable_diagnostics": true }"#).unwrap();
/// assert!(config.enable_diagnostics);
/// assert_eq!(config.tag, "{Cipher Output}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Report every transform to the engine's observer.
    pub enable_diagnostics: bool,
    /// Prefix of diagnostic lines written by the log observer.
    pub tag: String,
    pub non_letter_policy: NonLetterPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enable_diagnostics: false,
            tag: DEFAULT_TAG.to_string(),
            non_letter_policy: NonLetterPolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json(json: &str) -> Result<Self, CipherError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CipherError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn with_diagnostics(mut self, enable_diagnostics: bool) -> Self {
        self.enable_diagnostics = enable_diagnostics;
        self
    }

    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    pub fn with_non_letter_policy(mut self, policy: NonLetterPolicy) -> Self {
        self.non_letter_policy = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert!(!config.enable_diagnostics);
        assert_eq!(config.tag, DEFAULT_TAG);
        assert_eq!(config.non_letter_policy, NonLetterPolicy::Lenient);
    }

    #[test]
    fn test_json_round_trip() -> Result<(), CipherError> {
        let config = EngineConfig::default()
            .with_diagnostics(true)
            .with_tag("[ciphers]")
            .with_non_letter_policy(NonLetterPolicy::Strict);
        let json = config.to_json()?;
        assert_eq!(
            json,
            r#"{"enable_diagnostics":true,"tag":"[ciphers]","non_letter_policy":"strict"}"#
        );
        assert_eq!(EngineConfig::from_json(&json)?, config);
        Ok(())
    }

    #[test]
    fn test_empty_object_is_default() -> Result<(), CipherError> {
        assert_eq!(EngineConfig::from_json("{}")?, EngineConfig::default());
        Ok(())
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "non_letter_policy": "loose" }"#),
            Err(CipherError::SerializationError(_))
        ));
    }
}
