//! Shared types and pure helpers for fitcoach components.

pub mod catalog;
pub mod error;
pub mod extract;
pub mod rpc;

pub use catalog::{select_model, GenerationMethod, ModelCatalog, ModelDescriptor};
pub use error::RelayError;
pub use extract::extract_analysis;
pub use rpc::{AnalysisRequest, AnalysisResponse, ErrorBody, HealthResponse};
