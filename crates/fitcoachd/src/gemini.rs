//! HTTP client for the generative-language upstream.
//!
//! Two operations: fetching the model catalog and generating content for a
//! chosen model and method. Each network attempt runs under its own
//! deadline; retries reuse the identical request with the configured fixed
//! backoff in between.

use crate::config::RelayConfig;
use crate::retry::{run_with_retry, RetryPolicy};
use anyhow::{Context, Result};
use fitcoach_shared::catalog::{GenerationMethod, ModelCatalog, ModelDescriptor};
use fitcoach_shared::error::RelayError;
use fitcoach_shared::extract::extract_analysis;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Terminal dispatch failure, reported after the retry budget is spent
#[derive(Error, Debug, Clone)]
pub enum DispatchError {
    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("Request exceeded its deadline")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),
}

impl From<DispatchError> for RelayError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Upstream { status, body } => RelayError::Upstream { status, body },
            DispatchError::Timeout => RelayError::Timeout,
            DispatchError::Transport(msg) => RelayError::Transport(msg),
        }
    }
}

/// Client for the generative-language API
#[derive(Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    request_timeout: Duration,
    policy: RetryPolicy,
}

impl GeminiClient {
    pub fn new(config: &RelayConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            request_timeout: config.request_timeout(),
            policy: RetryPolicy::new(config.max_attempts, config.backoff()),
        })
    }

    /// Fetch the model catalog. Soft-fails: once the retry budget is spent
    /// the result is an empty list, never an error.
    pub async fn fetch_models(&self) -> Vec<ModelDescriptor> {
        let url = format!("{}/v1beta/models", self.base_url);
        debug!("📡  Fetching model catalog from {}", url);

        let outcome = run_with_retry(self.policy, |attempt| {
            let url = url.clone();
            async move { self.catalog_attempt(&url, attempt).await }
        })
        .await;

        match outcome {
            Ok(models) => {
                info!("✅  Model catalog fetched: {} models", models.len());
                models
            }
            Err(e) => {
                warn!(
                    "Model catalog unavailable after {} attempts: {}",
                    self.policy.max_attempts, e
                );
                Vec::new()
            }
        }
    }

    async fn catalog_attempt(
        &self,
        url: &str,
        attempt: u32,
    ) -> Result<Vec<ModelDescriptor>, DispatchError> {
        debug!("GET {} (attempt {}/{})", url, attempt, self.policy.max_attempts);

        let fetch = async {
            let response = self
                .client
                .get(url)
                .query(&[("key", self.api_key.as_str())])
                .send()
                .await
                .map_err(classify)?;

            let status = response.status();
            let body = response.text().await.map_err(classify)?;

            if !status.is_success() {
                return Err(DispatchError::Upstream {
                    status: status.as_u16(),
                    body,
                });
            }

            let catalog: ModelCatalog = serde_json::from_str(&body)
                .map_err(|e| DispatchError::Transport(format!("Malformed catalog body: {}", e)))?;
            Ok(catalog.models)
        };

        match tokio::time::timeout(self.request_timeout, fetch).await {
            Ok(result) => result,
            Err(_) => Err(DispatchError::Timeout),
        }
    }

    /// Generate content for a selected model and method. The prompt, model
    /// and method stay fixed across attempts; a 2xx body goes through the
    /// response extractor before being returned.
    pub async fn generate(
        &self,
        model_name: &str,
        method: GenerationMethod,
        prompt: &str,
    ) -> Result<String, DispatchError> {
        // The catalog name ("models/gemini-pro") is used verbatim in the path
        let url = format!("{}/v1beta/{}:{}", self.base_url, model_name, method);
        let body = serde_json::json!({
            "contents": [
                { "parts": [ { "text": prompt } ] }
            ]
        });

        let raw = run_with_retry(self.policy, |attempt| {
            let url = url.clone();
            let body = body.clone();
            async move { self.generate_attempt(&url, &body, attempt).await }
        })
        .await?;

        Ok(extract_analysis(&raw))
    }

    async fn generate_attempt(
        &self,
        url: &str,
        body: &serde_json::Value,
        attempt: u32,
    ) -> Result<String, DispatchError> {
        debug!("POST {} (attempt {}/{})", url, attempt, self.policy.max_attempts);

        let dispatch = async {
            let response = self
                .client
                .post(url)
                .query(&[("key", self.api_key.as_str())])
                .json(body)
                .send()
                .await
                .map_err(classify)?;

            let status = response.status();
            let text = response.text().await.map_err(classify)?;

            if !status.is_success() {
                return Err(DispatchError::Upstream {
                    status: status.as_u16(),
                    body: text,
                });
            }

            Ok(text)
        };

        match tokio::time::timeout(self.request_timeout, dispatch).await {
            Ok(result) => result,
            Err(_) => Err(DispatchError::Timeout),
        }
    }
}

/// Sort a reqwest failure into the dispatch taxonomy
fn classify(e: reqwest::Error) -> DispatchError {
    if e.is_timeout() {
        DispatchError::Timeout
    } else {
        DispatchError::Transport(e.to_string())
    }
}
