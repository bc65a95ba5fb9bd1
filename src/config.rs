//! Runtime Configuration
//!
//! The host page may define `window.__BRIGHTPATH_CONFIG__` before the wasm
//! bundle loads. Missing keys take their defaults; a missing object means
//! all defaults.

use std::str::FromStr;

use chrono::NaiveDate;
use portal_data::{fixtures, Latency, LatencyProfile};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::Level;
use wasm_bindgen::JsValue;

pub const CONFIG_GLOBAL: &str = "__BRIGHTPATH_CONFIG__";

/// Upper bound for the simulated delay, keeps a typo from freezing the UI
const MAX_LATENCY_MS: u32 = 10_000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config is not valid: {0}")]
    Parse(String),

    #[error("unknown log level '{0}'")]
    InvalidLevel(String),

    #[error("latency_ms must be at most {MAX_LATENCY_MS}, got {0}")]
    LatencyTooHigh(u32),

    #[error("toast_timeout_ms must be greater than zero")]
    ZeroToastTimeout,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub app_name: String,
    /// One delay for every mock call. `None` keeps the per-kind defaults.
    pub latency_ms: Option<u32>,
    pub toast_timeout_ms: u32,
    pub log_level: String,
    /// Pin "today" for overdue checks and new records
    pub today: Option<NaiveDate>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: "Brightpath".to_string(),
            latency_ms: None,
            toast_timeout_ms: 3500,
            log_level: "info".to_string(),
            today: None,
        }
    }
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        Level::from_str(&self.log_level).map_err(|_| ConfigError::InvalidLevel(self.log_level.clone()))?;
        if let Some(ms) = self.latency_ms.filter(|ms| *ms > MAX_LATENCY_MS) {
            return Err(ConfigError::LatencyTooHigh(ms));
        }
        if self.toast_timeout_ms == 0 {
            return Err(ConfigError::ZeroToastTimeout);
        }
        Ok(())
    }

    pub fn level(&self) -> Level {
        Level::from_str(&self.log_level).unwrap_or(Level::INFO)
    }

    pub fn latency_profile(&self) -> LatencyProfile {
        match self.latency_ms {
            Some(ms) => LatencyProfile::uniform(Latency::fixed(ms)),
            None => LatencyProfile::default(),
        }
    }

    /// Falls back to the date the demo fixtures were written around
    pub fn today(&self) -> NaiveDate {
        self.today.unwrap_or_else(fixtures::fixture_today)
    }
}

/// Read the config global. Absent means defaults; present but malformed is
/// an error so the caller can log it once logging is up.
pub fn load() -> Result<AppConfig, ConfigError> {
    let Some(window) = web_sys::window() else {
        return Ok(AppConfig::default());
    };
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL))
        .map_err(|e| ConfigError::Parse(format!("{:?}", e)))?;
    if value.is_undefined() || value.is_null() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_wasm_bindgen::from_value(value).map_err(|e| ConfigError::Parse(e.to_string()))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = AppConfig::from_json("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.level(), Level::INFO);
        assert_eq!(config.latency_profile(), LatencyProfile::default());
        assert_eq!(config.today(), fixtures::fixture_today());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_json(
            r#"{"app_name":"Demo","latency_ms":0,"log_level":"debug","today":"2025-04-01","toast_timeout_ms":1000}"#,
        )
        .unwrap();
        assert_eq!(config.app_name, "Demo");
        assert_eq!(config.level(), Level::DEBUG);
        assert_eq!(config.latency_profile(), LatencyProfile::uniform(Latency::NONE));
        assert_eq!(config.today(), NaiveDate::from_ymd_opt(2025, 4, 1).unwrap());
        assert_eq!(config.toast_timeout_ms, 1000);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_json(r#"{"log_level":"loud"}"#),
            Err(ConfigError::InvalidLevel(level)) if level == "loud"
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"latency_ms":60000}"#),
            Err(ConfigError::LatencyTooHigh(60000))
        ));
        assert!(matches!(
            AppConfig::from_json(r#"{"toast_timeout_ms":0}"#),
            Err(ConfigError::ZeroToastTimeout)
        ));
        assert!(matches!(AppConfig::from_json("[1,2]"), Err(ConfigError::Parse(_))));
    }
}
