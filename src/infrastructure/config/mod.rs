use crate::domain::error::{AppError, Result};
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use url::Url;

/// Where to reach the analyze backend. `timeout_secs: None` waits
/// indefinitely; set it to get a `Timeout` failure instead of a stuck
/// Loading state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BackendConfig {
    pub base_url: String,
    pub timeout_secs: Option<u64>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl BackendConfig {
    /// Defaults, then `api_insight.toml`, then `API_INSIGHT_`-prefixed
    /// environment variables. A `.env` file is honored if present.
    pub fn load() -> Result<Self> {
        let _ = dotenvy::dotenv();
        let config: BackendConfig = Figment::from(Serialized::defaults(BackendConfig::default()))
            .merge(Toml::file("api_insight.toml"))
            .merge(Env::prefixed("API_INSIGHT_"))
            .extract()
            .map_err(|e| AppError::ValidationError(format!("Invalid configuration: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        Url::parse(&self.base_url).map_err(|e| {
            AppError::ValidationError(format!("Invalid base_url '{}': {}", self.base_url, e))
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_garbage_url() {
        let config = BackendConfig {
            base_url: "not a url".to_string(),
            timeout_secs: Some(5),
        };
        assert!(config.validate().is_err());
    }
}
