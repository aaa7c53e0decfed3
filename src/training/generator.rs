//! Training Module Generator
//!
//! Main entry point for assembling farmer training modules.
//! Orchestrates the knowledge base, the insight provider, and the seven
//! section writers to produce one markdown document.
//!
//! Public API (consumed by api_server.rs and generate_sample_modules.rs):
//! - TrainingModuleGenerator::new() -> Self
//! - TrainingModuleGenerator::generate(request) -> ModuleResult

use std::sync::Arc;

use chrono::{Local, NaiveDateTime};

use crate::training::insight::{InsightProvider, TemplateInsight};
use crate::training::knowledge_base::KnowledgeBase;
use crate::training::sections::{
    s1_crop_facts,
    s2_focus_area,
    s3_expected_results,
    s4_implementation_tips,
    s5_faq,
    s6_system_info,
    s7_getting_help,
};
use crate::training::types::{ModuleMetadata, ModuleRequest, ModuleResult};

/// Display format for generation timestamps, e.g. "15 June 2025, 02:30 PM".
pub const TIMESTAMP_FORMAT: &str = "%d %B %Y, %I:%M %p";

/// Markers that every generated document contains, in document order.
pub const SECTION_MARKERS: [&str; 8] = [
    s1_crop_facts::MARKER,
    s2_focus_area::MARKER,
    s2_focus_area::TECHNIQUES_MARKER,
    s2_focus_area::STEP_GUIDE_MARKER,
    s3_expected_results::MARKER,
    s4_implementation_tips::MARKER,
    s5_faq::MARKER,
    s6_system_info::MARKER,
];

/// Training module generator - stateless apart from read-only lookup data.
pub struct TrainingModuleGenerator {
    knowledge: Arc<KnowledgeBase>,
    insight: Box<dyn InsightProvider>,
}

impl TrainingModuleGenerator {
    /// Generator over the embedded knowledge base with template insights.
    pub fn new() -> Self {
        Self::with_provider(Arc::new(KnowledgeBase::new()), Box::new(TemplateInsight))
    }

    pub fn with_provider(knowledge: Arc<KnowledgeBase>, insight: Box<dyn InsightProvider>) -> Self {
        Self { knowledge, insight }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn insight_available(&self) -> bool {
        self.insight.is_available()
    }

    /// Generate a module stamped with the current local time.
    pub fn generate(&self, request: &ModuleRequest) -> ModuleResult {
        self.generate_at(request, Local::now().naive_local())
    }

    /// Generate a complete training module for a request.
    ///
    /// # Arguments
    /// * `request` - Validated request; crop/region/problem are shown as given
    /// * `timestamp` - Generation time shown in the header and metadata
    pub fn generate_at(&self, request: &ModuleRequest, timestamp: NaiveDateTime) -> ModuleResult {
        let generation_time = timestamp.format(TIMESTAMP_FORMAT).to_string();

        let crop = self.knowledge.lookup_crop(&request.crop);
        let solution = self.knowledge.lookup_problem(&request.problem);

        let ai_used = self.insight.is_available();
        let insight = ai_used.then(|| {
            self.insight
                .generate_insight(&request.crop, &request.region, &request.problem)
        });

        tracing::debug!(
            crop = %request.crop,
            known_crop = self.knowledge.is_known_crop(&request.crop),
            known_problem = self.knowledge.is_known_problem(&request.problem),
            ai_used,
            "Assembling training module"
        );

        let sections = [
            generate_header(&crop.name, &request.region, &request.language, &generation_time),
            s1_crop_facts::generate(&crop),
            s2_focus_area::generate(
                &request.problem,
                &request.region,
                &solution,
                insight.as_deref(),
            ),
            s3_expected_results::generate(&request.problem),
            s4_implementation_tips::generate(),
            s5_faq::generate(),
            s6_system_info::generate(&generation_time, ai_used),
            s7_getting_help::generate(&request.region),
        ];

        // The closing disclaimer sits directly under its rule
        let content = format!("{}\n\n---\n{}", sections.join("\n\n---\n\n"), generate_footer());

        ModuleResult {
            content,
            metadata: ModuleMetadata {
                generation_time,
                crop: request.crop.clone(),
                region: request.region.clone(),
                problem: request.problem.clone(),
                language: request.language.clone(),
                ai_used,
            },
        }
    }
}

impl Default for TrainingModuleGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Document title block.
fn generate_header(crop_name: &str, region: &str, language: &str, generation_time: &str) -> String {
    format!(
        "# FARMER TRAINING MODULE\n## Crop: {} | Region: {} | Language: {}\n\n### 📅 GENERATED ON: {}",
        crop_name, region, language, generation_time
    )
}

fn generate_footer() -> String {
    "*This training module was generated automatically based on agricultural best practices.*\n\
     *Always consult local agricultural experts before implementing new techniques.*"
        .to_string()
}
