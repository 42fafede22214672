use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::constants::{
    DEFAULT_PUBCHEM_BASE_URL, DEFAULT_SEARCH_BASE_URL, DEFAULT_TARGET_LANGUAGE,
    DEFAULT_TRANSLATE_BASE_URL,
};

/// Base URLs of the external services. Unset entries use the public services.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub pubchem: Option<String>,
    pub search: Option<String>,
    pub translate: Option<String>,
}

impl Endpoints {
    pub fn pubchem(&self) -> &str {
        self.pubchem.as_deref().unwrap_or(DEFAULT_PUBCHEM_BASE_URL)
    }

    pub fn search(&self) -> &str {
        self.search.as_deref().unwrap_or(DEFAULT_SEARCH_BASE_URL)
    }

    pub fn translate(&self) -> &str {
        self.translate.as_deref().unwrap_or(DEFAULT_TRANSLATE_BASE_URL)
    }
}

#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Language code replies are translated into (e.g., "en", "es")
    pub target_language: Option<String>,
    /// Translate every bot reply
    pub translate: Option<bool>,
    /// Offer to remember replies that did not need a lookup
    pub learn: Option<bool>,
    /// Per-request timeout for the external services; unset means none
    pub request_timeout_secs: Option<u64>,
    /// Translation API key, used when neither the environment nor the keyring has one
    pub translate_api_key: Option<String>,
    #[serde(default)]
    pub endpoints: Endpoints,
    /// Extra canned answers, merged over the built-in greetings
    #[serde(default)]
    pub answers: HashMap<String, String>,
}

impl Config {
    pub fn target_language(&self) -> &str {
        self.target_language
            .as_deref()
            .unwrap_or(DEFAULT_TARGET_LANGUAGE)
    }

    pub fn translate_enabled(&self) -> bool {
        self.translate.unwrap_or(true)
    }

    pub fn learn_enabled(&self) -> bool {
        self.learn.unwrap_or(true)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

/// Get a user-friendly display string for a path
/// Converts absolute paths to use ~ notation on Unix-like systems when possible
pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
