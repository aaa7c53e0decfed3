//! Advisory insight selection.
//!
//! `InsightProvider` is the seam where a generative model would plug in.
//! The shipped `TemplateInsight` picks one of four fixed sentences using a
//! 64-bit FNV-1a hash of the raw inputs, so the same request always gets the
//! same line, across processes and restarts.

/// Line used in the document when no provider is available.
pub const FALLBACK_INSIGHT: &str = "System analysis recommends integrated management approach.";

/// Number of insight templates.
pub const INSIGHT_TEMPLATE_COUNT: usize = 4;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Source of the advisory line in each training module.
pub trait InsightProvider: Send + Sync {
    /// Whether the provider can produce insights right now.
    fn is_available(&self) -> bool;

    /// Produce an advisory sentence for the given inputs.
    fn generate_insight(&self, crop: &str, region: &str, problem: &str) -> String;
}

/// Deterministic template-based insight provider. Always available.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateInsight;

impl InsightProvider for TemplateInsight {
    fn is_available(&self) -> bool {
        true
    }

    fn generate_insight(&self, crop: &str, region: &str, problem: &str) -> String {
        select_insight(crop, region, problem)
    }
}

/// 64-bit FNV-1a over raw bytes.
pub fn fnv1a_64(bytes: &[u8]) -> u64 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &b| {
        (hash ^ u64::from(b)).wrapping_mul(FNV_PRIME)
    })
}

/// Template slot for an input triple: FNV-1a of `crop + region + problem`, mod 4.
pub fn template_index(crop: &str, region: &str, problem: &str) -> usize {
    let key = format!("{}{}{}", crop, region, problem);
    (fnv1a_64(key.as_bytes()) % INSIGHT_TEMPLATE_COUNT as u64) as usize
}

/// Pick the insight sentence for an input triple.
pub fn select_insight(crop: &str, region: &str, problem: &str) -> String {
    match template_index(crop, region, problem) {
        0 => format!(
            "AI analysis suggests focusing on {}-specific adaptation for {}.",
            region, crop
        ),
        1 => format!(
            "Machine learning models indicate integrated approach works best for {}.",
            problem
        ),
        2 => format!(
            "Data patterns show {} responds well to timely {} management.",
            crop, problem
        ),
        _ => "AI recommendation: Combine traditional knowledge with modern techniques.".to_string(),
    }
}
