//! Farmer Training Module Generator
//!
//! Assembles personalized farming training modules (markdown) from a fixed
//! agricultural knowledge base and serves them over a small Axum API.
//!
//! - `training/`: knowledge base, insight selection, section writers, generator
//! - `config`: environment-driven server configuration
//! - `api_server`, `web/`: HTTP boundary (feature `api`)

pub mod config;
pub mod training;

#[cfg(feature = "api")]
pub mod api_server;

#[cfg(feature = "api")]
pub mod web;

// Re-export commonly used types
pub use config::ServerConfig;
pub use training::{
    KnowledgeBase, ModuleRequest, ModuleResult, RawModuleRequest, TrainingModuleGenerator,
    ValidationError,
};

#[cfg(feature = "api")]
pub use api_server::{create_router, AppState};
