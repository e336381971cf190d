//! Wire types for the fitcoach HTTP surface.

use crate::error::RelayError;
use serde::{Deserialize, Serialize};

/// Inbound analysis request
///
/// Both records are opaque JSON: the pipeline embeds them verbatim in the
/// prompt and never inspects their shape. They are optional at the serde
/// level so that a missing field reaches validation instead of failing
/// deserialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub user_data: Option<serde_json::Value>,
    #[serde(default)]
    pub exercise_data: Option<serde_json::Value>,
}

impl AnalysisRequest {
    pub fn new(user_data: serde_json::Value, exercise_data: serde_json::Value) -> Self {
        Self {
            user_data: Some(user_data),
            exercise_data: Some(exercise_data),
        }
    }

    /// Validated access to both records. Each must be present and non-null;
    /// the error names the missing wire field.
    pub fn validated(&self) -> Result<(&serde_json::Value, &serde_json::Value), RelayError> {
        let user_data = require(&self.user_data, "userData")?;
        let exercise_data = require(&self.exercise_data, "exerciseData")?;
        Ok((user_data, exercise_data))
    }
}

fn require<'a>(
    field: &'a Option<serde_json::Value>,
    name: &'static str,
) -> Result<&'a serde_json::Value, RelayError> {
    match field {
        Some(value) if !value.is_null() => Ok(value),
        _ => Err(RelayError::Validation(name)),
    }
}

/// Successful analysis response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub ai_answer: String,
}

/// Error payload returned by the front door
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upstream_body: Option<String>,
}

impl ErrorBody {
    pub fn from_error(err: &RelayError) -> Self {
        match err {
            RelayError::Upstream { status, body } => Self {
                error: err.to_string(),
                upstream_status: Some(*status),
                upstream_body: Some(body.clone()),
            },
            _ => Self {
                error: err.to_string(),
                upstream_status: None,
                upstream_body: None,
            },
        }
    }
}

/// Health endpoint payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}
