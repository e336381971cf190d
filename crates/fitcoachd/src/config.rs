//! Configuration for fitcoachd.
//!
//! Everything comes from the environment, read once at startup. The rest of
//! the daemon receives the resulting value explicitly and never touches
//! ambient state again.

use anyhow::{bail, Result};
use std::time::Duration;
use tracing::info;

/// Default upstream API base URL
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Upstream API credential. Required; never logged.
    pub api_key: String,

    /// Upstream base URL, overridable for tests
    pub base_url: String,

    /// Deadline for each network attempt, not cumulative across retries
    pub request_timeout_secs: u64,

    /// Total attempts per network operation, first try included
    pub max_attempts: u32,

    /// Fixed wait between attempts
    pub backoff_ms: u64,

    /// Front door listen port
    pub port: u16,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_max_attempts() -> u32 {
    3
}

fn default_backoff_ms() -> u64 {
    2_000
}

fn default_port() -> u16 {
    3000
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
            port: default_port(),
        }
    }
}

impl RelayConfig {
    /// Load configuration from the environment. The API key is the only
    /// required setting; everything else falls back to defaults.
    pub fn from_env() -> Result<Self> {
        let Some(api_key) = env_string("GEMINI_API_KEY") else {
            bail!("GEMINI_API_KEY is not set");
        };

        let config = Self {
            api_key,
            base_url: env_string("GEMINI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout_secs: env_parse("GEMINI_TIMEOUT_SECS", default_timeout_secs()),
            // Zero attempts would mean never calling upstream at all
            max_attempts: env_parse("GEMINI_MAX_ATTEMPTS", default_max_attempts()).max(1),
            backoff_ms: env_parse("GEMINI_BACKOFF_MS", default_backoff_ms()),
            port: env_parse("FITCOACH_PORT", default_port()),
        };

        info!(
            "Config loaded: base_url={} timeout={}s attempts={} backoff={}ms port={}",
            config.base_url,
            config.request_timeout_secs,
            config.max_attempts,
            config.backoff_ms,
            config.port
        );

        Ok(config)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }
}

/// Non-empty environment string, if set
fn env_string(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

/// Parse an environment value, falling back on absence or garbage
fn env_parse<T: std::str::FromStr>(key: &str, fallback: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}
