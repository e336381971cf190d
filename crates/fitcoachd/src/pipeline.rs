//! Analysis pipeline - the linear path from inbound request to answer.
//!
//! Order is fixed: validate, fetch catalog, select model, build prompt,
//! dispatch. The first failure short-circuits. Nothing is cached between
//! requests; every analysis re-fetches the catalog and re-selects a model.

use crate::gemini::GeminiClient;
use crate::prompts::build_analysis_prompt;
use fitcoach_shared::catalog::select_model;
use fitcoach_shared::error::RelayError;
use fitcoach_shared::rpc::{AnalysisRequest, AnalysisResponse};
use tracing::{info, warn};

/// Run one analysis request end to end.
pub async fn run_analysis(
    gemini: &GeminiClient,
    request: &AnalysisRequest,
) -> Result<AnalysisResponse, RelayError> {
    // Validation happens before any network traffic
    let (user_data, exercise_data) = request.validated()?;

    let models = gemini.fetch_models().await;
    if models.is_empty() {
        warn!("No models available, refusing analysis");
        return Err(RelayError::NoModelsAvailable);
    }

    let (model, method) = select_model(&models).ok_or(RelayError::NoSuitableModel)?;
    info!("Selected model {} via {}", model.name, method);

    let prompt = build_analysis_prompt(user_data, exercise_data);
    let ai_answer = gemini.generate(&model.name, method, &prompt).await?;

    Ok(AnalysisResponse { ai_answer })
}
