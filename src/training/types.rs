//! Shared data types for training module generation.
//!
//! Data sources:
//! - Crop and problem profiles: static tables in `knowledge_base.rs`
//! - Requests: validated form input (see `request.rs`)

use serde::{Deserialize, Serialize};

/// Language used when the caller does not pick one.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Growing facts for a single crop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropProfile {
    pub name: String,
    pub season: String,
    pub water_needs: String,
    pub spacing: String,
    pub duration_days: String, // free text, e.g. "110-130 days"
}

/// Techniques and a step plan for a farming problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemProfile {
    pub techniques: Vec<String>,
    pub steps: Vec<String>,
    pub benefits: String,
}

/// A validated module request.
///
/// Construct through `RawModuleRequest::validate` at the HTTP boundary, or
/// directly with `ModuleRequest::new` when input is already known to be clean.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleRequest {
    pub crop: String,
    pub region: String,
    pub problem: String,
    pub language: String,
}

impl ModuleRequest {
    pub fn new(
        crop: impl Into<String>,
        region: impl Into<String>,
        problem: impl Into<String>,
    ) -> Self {
        Self {
            crop: crop.into(),
            region: region.into(),
            problem: problem.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }
}

/// Generation metadata returned alongside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleMetadata {
    pub generation_time: String, // "15 June 2025, 02:30 PM"
    pub crop: String,
    pub region: String,
    pub problem: String,
    pub language: String,
    pub ai_used: bool,
}

/// A generated training module: markdown content plus metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleResult {
    pub content: String,
    pub metadata: ModuleMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_defaults_to_english() {
        let request = ModuleRequest::new("Rice", "Punjab", "irrigation");
        assert_eq!(request.language, "English");

        let request = request.with_language("Hindi");
        assert_eq!(request.language, "Hindi");
    }

    #[test]
    fn test_metadata_uses_snake_case_keys() {
        let metadata = ModuleMetadata {
            generation_time: "15 June 2025, 02:30 PM".to_string(),
            crop: "Rice".to_string(),
            region: "Punjab".to_string(),
            problem: "irrigation".to_string(),
            language: "English".to_string(),
            ai_used: true,
        };

        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["generation_time"], "15 June 2025, 02:30 PM");
        assert_eq!(json["ai_used"], true);
    }
}
