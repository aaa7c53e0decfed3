//! Inbound request shape and boundary validation.
//!
//! The core generator assumes clean input. Everything that arrives over the
//! wire goes through `RawModuleRequest::validate` first.

use serde::Deserialize;
use thiserror::Error;

use crate::training::types::{ModuleRequest, DEFAULT_LANGUAGE};

/// Errors raised before a request reaches the generator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// One or more required fields were absent or blank after trimming.
    #[error("Please fill in all fields: Crop, Region, and Problem (missing: {})", .missing.join(", "))]
    MissingFields { missing: Vec<&'static str> },
}

/// Request body as posted by the landing page form.
///
/// All fields are optional at this stage so that a missing key and an empty
/// string produce the same validation error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawModuleRequest {
    #[serde(default)]
    pub crop: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub problem: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
}

impl RawModuleRequest {
    /// Trim every field, reject blanks, and default the language.
    pub fn validate(self) -> Result<ModuleRequest, ValidationError> {
        let crop = trimmed(self.crop);
        let region = trimmed(self.region);
        let problem = trimmed(self.problem);

        let fields = [("crop", &crop), ("region", &region), ("problem", &problem)];
        let missing: Vec<&'static str> = fields
            .into_iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(field, _)| field)
            .collect();

        if !missing.is_empty() {
            return Err(ValidationError::MissingFields { missing });
        }

        let language = match trimmed(self.language) {
            l if l.is_empty() => DEFAULT_LANGUAGE.to_string(),
            l => l,
        };

        Ok(ModuleRequest {
            crop,
            region,
            problem,
            language,
        })
    }
}

fn trimmed(value: Option<String>) -> String {
    value.map(|v| v.trim().to_string()).unwrap_or_default()
}
