use crate::core::config::data::Config;
use crate::core::config::io::ConfigError;

/// Keys accepted by `papagaio set` / `papagaio unset`.
pub const CONFIG_KEYS: &[&str] = &[
    "target-language",
    "translate",
    "learn",
    "request-timeout",
    "translate-api-key",
    "pubchem-url",
    "search-url",
    "translate-url",
];

impl Config {
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(invalid(key, value));
        }
        match key {
            "target-language" => self.target_language = Some(value.to_lowercase()),
            "translate" => self.translate = Some(parse_toggle(key, value)?),
            "learn" => self.learn = Some(parse_toggle(key, value)?),
            "request-timeout" => {
                let secs = value.parse::<u64>().map_err(|_| invalid(key, value))?;
                self.request_timeout_secs = Some(secs);
            }
            "translate-api-key" => self.translate_api_key = Some(value.to_string()),
            "pubchem-url" => self.endpoints.pubchem = Some(value.to_string()),
            "search-url" => self.endpoints.search = Some(value.to_string()),
            "translate-url" => self.endpoints.translate = Some(value.to_string()),
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn unset_value(&mut self, key: &str) -> Result<(), ConfigError> {
        match key {
            "target-language" => self.target_language = None,
            "translate" => self.translate = None,
            "learn" => self.learn = None,
            "request-timeout" => self.request_timeout_secs = None,
            "translate-api-key" => self.translate_api_key = None,
            "pubchem-url" => self.endpoints.pubchem = None,
            "search-url" => self.endpoints.search = None,
            "translate-url" => self.endpoints.translate = None,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }
}

fn parse_toggle(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        value: value.to_string(),
    }
}
