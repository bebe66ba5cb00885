// src/config.rs
use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Process-wide settings, read once at startup from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub model_name: String,
    pub api_base: String,
    pub api_key: Option<String>,
    pub temperature: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            model_name: DEFAULT_MODEL.to_string(),
            api_base: DEFAULT_API_BASE.to_string(),
            api_key: None,
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut settings = Settings::default();

        if let Ok(port) = env::var("PORT") {
            settings.port = parse_value("PORT", &port)?;
        }
        if let Ok(name) = env::var("MODEL_NAME") {
            settings.model_name = name;
        }
        if let Ok(base) = env::var("MODEL_API_BASE") {
            settings.api_base = base;
        }
        settings.api_key = env::var("MODEL_API_KEY").ok();
        if let Ok(temp) = env::var("MODEL_TEMPERATURE") {
            settings.temperature = parse_value("MODEL_TEMPERATURE", &temp)?;
        }

        Ok(settings)
    }
}

fn parse_value<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::Invalid {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.port, 8000);
        assert_eq!(settings.model_name, "gpt-3.5-turbo");
        assert_eq!(settings.temperature, 0.7);
        assert!(settings.api_key.is_none());
    }

    #[test]
    fn parse_value_rejects_garbage() {
        assert!(parse_value::<u16>("PORT", "not-a-port").is_err());
        assert_eq!(parse_value::<u16>("PORT", "8080").unwrap(), 8080);
        assert_eq!(parse_value::<f32>("MODEL_TEMPERATURE", "0.2").unwrap(), 0.2);
    }
}
