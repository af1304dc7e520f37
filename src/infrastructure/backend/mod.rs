use crate::domain::error::{AppError, Result};
use crate::infrastructure::config::BackendConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;

/// Success envelope of the analyze backend. `testcases` may be a JSON string,
/// a keyed object, or a bare array depending on backend mood; a truthy
/// `error` marks a domain-level failure regardless of HTTP status.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct BackendReply {
    #[serde(default)]
    pub testcases: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
}

impl BackendReply {
    /// Backend-reported error. Truthiness semantics: `null`, `false`, `0`,
    /// and `""` are not failures.
    pub fn error_message(&self) -> Option<String> {
        let error = self.error.as_ref()?;
        match error {
            Value::Null => None,
            Value::Bool(false) => None,
            Value::Bool(true) => Some("true".to_string()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(n.to_string()),
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[async_trait]
pub trait AnalyzeClient {
    async fn analyze(&self, prompt: &str) -> Result<BackendReply>;
}

pub struct HttpAnalyzeClient {
    client: reqwest::Client,
    config: BackendConfig,
}

impl HttpAnalyzeClient {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| AppError::TransportError(format!("Failed to build client: {}", e)))?;
        Ok(Self { client, config })
    }

    fn endpoint_url(&self) -> String {
        if self.config.base_url.ends_with('/') {
            format!("{}analyze-api", self.config.base_url)
        } else {
            format!("{}/analyze-api", self.config.base_url)
        }
    }
}

#[async_trait]
impl AnalyzeClient for HttpAnalyzeClient {
    async fn analyze(&self, prompt: &str) -> Result<BackendReply> {
        let body = json!({ "endpoints": [prompt] });

        let response = self
            .client
            .post(self.endpoint_url())
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AppError::Timeout
                } else {
                    AppError::TransportError(format!("Request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(AppError::TransportError(format!(
                "API error ({}): {}",
                status, text
            )));
        }

        response
            .json::<BackendReply>()
            .await
            .map_err(|e| AppError::TransportError(format!("Failed to parse JSON: {}", e)))
    }
}
