//! Tests for catalog.rs

use fitcoach_shared::catalog::{select_model, GenerationMethod, ModelCatalog, ModelDescriptor};

fn descriptor(name: &str, methods: &[&str]) -> ModelDescriptor {
    ModelDescriptor {
        name: name.to_string(),
        supported_generation_methods: methods.iter().map(|m| m.to_string()).collect(),
    }
}

#[test]
fn test_select_first_model_with_generate_content() {
    let models = vec![
        descriptor("models/gemini-pro", &["generateContent"]),
        descriptor("models/gemini-flash", &["generateContent"]),
    ];
    let (model, method) = select_model(&models).unwrap();
    assert_eq!(model.name, "models/gemini-pro");
    assert_eq!(method, GenerationMethod::GenerateContent);
}

#[test]
fn test_select_falls_back_to_generate_text() {
    let models = vec![descriptor("models/text-bison", &["generateText"])];
    let (model, method) = select_model(&models).unwrap();
    assert_eq!(model.name, "models/text-bison");
    assert_eq!(method, GenerationMethod::GenerateText);
}

#[test]
fn test_catalog_order_beats_method_preference() {
    // An earlier text-only model wins over a later generateContent one.
    let models = vec![
        descriptor("models/text-bison", &["generateText"]),
        descriptor("models/gemini-pro", &["generateContent"]),
    ];
    let (model, method) = select_model(&models).unwrap();
    assert_eq!(model.name, "models/text-bison");
    assert_eq!(method, GenerationMethod::GenerateText);
}

#[test]
fn test_unusable_models_are_skipped() {
    let models = vec![
        descriptor("models/embedding-001", &["embedContent"]),
        descriptor("models/no-methods", &[]),
        descriptor("models/gemini-pro", &["generateContent", "countTokens"]),
    ];
    let (model, _) = select_model(&models).unwrap();
    assert_eq!(model.name, "models/gemini-pro");
}

#[test]
fn test_empty_catalog_selects_nothing() {
    assert!(select_model(&[]).is_none());
}

#[test]
fn test_all_unusable_selects_nothing() {
    let models = vec![
        descriptor("models/embedding-001", &["embedContent"]),
        descriptor("models/aqa", &["answerQuestion"]),
    ];
    assert!(select_model(&models).is_none());
}

#[test]
fn test_descriptor_deserializes_camel_case_wire_format() {
    let raw = r#"{
        "name": "models/gemini-pro",
        "supportedGenerationMethods": ["generateContent", "countTokens"]
    }"#;
    let model: ModelDescriptor = serde_json::from_str(raw).unwrap();
    assert_eq!(model.name, "models/gemini-pro");
    assert!(model.supports(GenerationMethod::GenerateContent));
    assert!(!model.supports(GenerationMethod::GenerateText));
}

#[test]
fn test_descriptor_without_methods_field_defaults_to_empty() {
    let model: ModelDescriptor = serde_json::from_str(r#"{"name": "models/mystery"}"#).unwrap();
    assert!(model.supported_generation_methods.is_empty());
    assert_eq!(model.usable_method(), None);
}

#[test]
fn test_catalog_envelope_requires_models_array() {
    let ok: Result<ModelCatalog, _> = serde_json::from_str(r#"{"models": []}"#);
    assert!(ok.unwrap().models.is_empty());

    // A body without the array is a malformed catalog, not an empty one.
    let missing: Result<ModelCatalog, _> = serde_json::from_str(r#"{"data": []}"#);
    assert!(missing.is_err());
    let wrong_type: Result<ModelCatalog, _> = serde_json::from_str(r#"{"models": "none"}"#);
    assert!(wrong_type.is_err());
}
