//! Model catalog types and selection.
//!
//! The upstream catalog is authoritative: descriptors are scanned in the
//! order received and the first one advertising a known generation method
//! wins. No capability ranking, no re-sorting.

use serde::{Deserialize, Serialize};

/// One model entry from the upstream catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Full resource name, e.g. "models/gemini-pro". Used verbatim when
    /// building the generate URL.
    pub name: String,
    /// Absent on some catalog entries; an empty list just makes the
    /// descriptor unusable.
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

/// Envelope of the catalog endpoint response. Deserializing this is the
/// shape check: a body without an array-typed `models` field is a failed
/// fetch, not an empty catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelCatalog {
    pub models: Vec<ModelDescriptor>,
}

/// Generation method, in preference order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMethod {
    GenerateContent,
    GenerateText,
}

impl GenerationMethod {
    /// Wire name, shared between catalog matching and the generate URL
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::GenerateContent => "generateContent",
            GenerationMethod::GenerateText => "generateText",
        }
    }
}

impl std::fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ModelDescriptor {
    pub fn supports(&self, method: GenerationMethod) -> bool {
        self.supported_generation_methods
            .iter()
            .any(|m| m == method.as_str())
    }

    /// The method to use for this descriptor, if it advertises a known one.
    /// generateContent wins when both are present.
    pub fn usable_method(&self) -> Option<GenerationMethod> {
        if self.supports(GenerationMethod::GenerateContent) {
            Some(GenerationMethod::GenerateContent)
        } else if self.supports(GenerationMethod::GenerateText) {
            Some(GenerationMethod::GenerateText)
        } else {
            None
        }
    }
}

/// Select the first usable model in catalog order, paired with the method
/// to call it with. A descriptor earlier in the list wins even when a later
/// one advertises a preferred method.
pub fn select_model(models: &[ModelDescriptor]) -> Option<(&ModelDescriptor, GenerationMethod)> {
    models
        .iter()
        .find_map(|model| model.usable_method().map(|method| (model, method)))
}
