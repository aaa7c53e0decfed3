//! Training Module Generator
//!
//! Generates farmer training modules in markdown format from a fixed
//! agricultural knowledge base.
//!
//! ## Sections
//! 1. About This Crop - season, water, spacing, duration
//! 2. Focus Area - insight, techniques, step-by-step guide, benefits, regional advice
//! 3. Expected Results - fixed quantitative and qualitative ranges
//! 4. Implementation Tips - do/don't checklist
//! 5. FAQ
//! 6. System Information - technology and generation details
//! 7. Getting Help - regional contacts and digital tools

pub mod types;
pub mod request;
pub mod knowledge_base;
pub mod insight;
pub mod sections;
pub mod generator;

pub use types::{CropProfile, ProblemProfile, ModuleRequest, ModuleResult, ModuleMetadata, DEFAULT_LANGUAGE};
pub use request::{RawModuleRequest, ValidationError};
pub use knowledge_base::{KnowledgeBase, title_case};
pub use insight::{InsightProvider, TemplateInsight, select_insight};
pub use generator::{TrainingModuleGenerator, SECTION_MARKERS};
