//! Error types for the fitcoach relay.

use thiserror::Error;

/// Failure taxonomy for an analysis request. Each variant carries enough to
/// pick a response status and to tell the failure categories apart in logs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RelayError {
    #[error("Missing required field: {0}")]
    Validation(&'static str),

    #[error("No models available from the upstream catalog")]
    NoModelsAvailable,

    #[error("No catalog model supports a known generation method")]
    NoSuitableModel,

    #[error("Upstream returned status {status}")]
    Upstream { status: u16, body: String },

    #[error("Upstream request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Transport(String),
}

impl RelayError {
    /// HTTP status for the front door response.
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Validation(_) => 400,
            RelayError::NoModelsAvailable => 502,
            RelayError::NoSuitableModel => 502,
            RelayError::Upstream { .. } => 502,
            RelayError::Timeout => 504,
            RelayError::Transport(_) => 502,
        }
    }

    /// True for failures that happened after a dispatch actually went out.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            RelayError::Upstream { .. } | RelayError::Timeout | RelayError::Transport(_)
        )
    }
}
