//! Where the translation API key comes from.

use keyring::Entry;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::config::Config;
use crate::core::constants::{PLACEHOLDER_API_KEY, TRANSLATE_KEY_ENV};

const KEYRING_SERVICE: &str = "papagaio";
const KEYRING_USER: &str = "translate";

/// Describes failures when attempting to access the system keyring.
///
/// Recoverable errors mean the backend was temporarily unavailable (a locked
/// keychain, no secret service running); permanent errors surface the cause.
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("keyring temporarily unavailable: {0}")]
    Recoverable(keyring::Error),
    #[error("{0}")]
    Permanent(keyring::Error),
    #[error("the system keyring is disabled for this session")]
    Disabled,
}

impl CredentialError {
    pub fn is_recoverable(&self) -> bool {
        matches!(self, CredentialError::Recoverable(_))
    }
}

impl From<keyring::Error> for CredentialError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::PlatformFailure(_) | keyring::Error::NoStorageAccess(_) => {
                CredentialError::Recoverable(err)
            }
            other => CredentialError::Permanent(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySource {
    Environment,
    Keyring,
    Config,
    Placeholder,
}

#[derive(Debug, Clone, Copy)]
pub struct CredentialStore {
    use_keyring: bool,
}

impl CredentialStore {
    pub fn new(use_keyring: bool) -> Self {
        Self { use_keyring }
    }

    fn entry(&self) -> Result<Entry, CredentialError> {
        if !self.use_keyring {
            return Err(CredentialError::Disabled);
        }
        Ok(Entry::new(KEYRING_SERVICE, KEYRING_USER)?)
    }

    pub fn store(&self, key: &str) -> Result<(), CredentialError> {
        self.entry()?.set_password(key)?;
        Ok(())
    }

    pub fn get(&self) -> Result<Option<String>, CredentialError> {
        if !self.use_keyring {
            return Ok(None);
        }
        match self.entry()?.get_password() {
            Ok(key) => Ok(Some(key)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Removes the stored key; `Ok(false)` when there was none.
    pub fn remove(&self) -> Result<bool, CredentialError> {
        match self.entry()?.delete_credential() {
            Ok(()) => Ok(true),
            Err(keyring::Error::NoEntry) => Ok(false),
            Err(err) => Err(err.into()),
        }
    }

    pub fn resolve_translate_key(&self, config: &Config) -> (String, KeySource) {
        self.resolve_with_env(std::env::var(TRANSLATE_KEY_ENV).ok(), config)
    }

    /// Environment, then keyring, then config file, then the placeholder.
    pub fn resolve_with_env(&self, env_key: Option<String>, config: &Config) -> (String, KeySource) {
        if let Some(key) = env_key.filter(|key| !key.trim().is_empty()) {
            return (key, KeySource::Environment);
        }
        match self.get() {
            Ok(Some(key)) => return (key, KeySource::Keyring),
            Ok(None) => debug!("no translation key in keyring"),
            Err(err) if err.is_recoverable() => debug!(error = %err, "keyring unavailable"),
            Err(err) => warn!(error = %err, "keyring lookup failed"),
        }
        if let Some(key) = config
            .translate_api_key
            .as_ref()
            .filter(|key| !key.trim().is_empty())
        {
            return (key.clone(), KeySource::Config);
        }
        (PLACEHOLDER_API_KEY.to_string(), KeySource::Placeholder)
    }
}
