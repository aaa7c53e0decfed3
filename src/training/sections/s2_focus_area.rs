//! S2: Focus Area
//!
//! The problem-specific part of the module:
//! - Advisory insight (or the fallback line when no provider is available)
//! - Recommended techniques, joined on one line
//! - Three-phase step guide (assessment, implementation, evaluation)
//! - Key benefits
//! - Region-specific advice
//!
//! The implementation phase lists the problem's steps verbatim, followed by
//! two fixed monitoring lines.

use crate::training::types::ProblemProfile;

pub const MARKER: &str = "## 🎯 FOCUS AREA";
pub const TECHNIQUES_MARKER: &str = "### RECOMMENDED TECHNIQUES";
pub const STEP_GUIDE_MARKER: &str = "### STEP-BY-STEP GUIDE";

const TECHNIQUE_SEPARATOR: &str = " • ";

/// Generate the S2 focus area section.
///
/// # Arguments
/// * `problem` - Problem name as entered (shown upper-cased in the heading)
/// * `region` - Region name as entered
/// * `solution` - Resolved problem profile
/// * `insight` - Advisory line; `None` when the provider is unavailable
pub fn generate(
    problem: &str,
    region: &str,
    solution: &ProblemProfile,
    insight: Option<&str>,
) -> String {
    let mut sections = Vec::new();

    sections.push(format!("{}: {}", MARKER, problem.to_uppercase()));

    sections.push(format!(
        "### AI-GENERATED INSIGHT:\n{}",
        insight.unwrap_or(crate::training::insight::FALLBACK_INSIGHT)
    ));

    sections.push(format!(
        "{}:\n{}",
        TECHNIQUES_MARKER,
        solution.techniques.join(TECHNIQUE_SEPARATOR)
    ));

    sections.push(generate_step_guide(problem, &solution.steps));

    sections.push(format!("### KEY BENEFITS:\n{}", solution.benefits));

    sections.push(format!(
        "### REGION-SPECIFIC ADVICE FOR {}:\n\
         - Consider local weather patterns\n\
         - Adapt to soil conditions in your area\n\
         - Consult local agriculture department\n\
         - Join local farmer groups for support",
        region.to_uppercase()
    ));

    sections.join("\n\n")
}

fn generate_step_guide(problem: &str, steps: &[String]) -> String {
    let mut lines = vec![format!("{}:", STEP_GUIDE_MARKER), String::new()];

    lines.push("1. **Week 1-2: Assessment & Planning**".to_string());
    lines.push(format!("   - Evaluate current {} conditions", problem));
    lines.push("   - Gather necessary tools and resources".to_string());
    lines.push("   - Create implementation schedule".to_string());
    lines.push(String::new());

    lines.push("2. **Week 3-8: Implementation**".to_string());
    for step in steps {
        lines.push(format!("   - {}", step));
    }
    lines.push("   - Monitor progress weekly".to_string());
    lines.push("   - Make adjustments as needed".to_string());
    lines.push(String::new());

    lines.push("3. **Week 9-12: Evaluation**".to_string());
    lines.push("   - Measure results and improvements".to_string());
    lines.push("   - Document lessons learned".to_string());
    lines.push("   - Share knowledge with other farmers".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::KnowledgeBase;

    #[test]
    fn test_heading_uppercases_problem() {
        let solution = KnowledgeBase::new().lookup_problem("pest control");
        let section = generate("pest control", "Kerala", &solution, Some("insight"));
        assert!(section.starts_with("## 🎯 FOCUS AREA: PEST CONTROL"));
        assert!(section.contains("### REGION-SPECIFIC ADVICE FOR KERALA:"));
    }

    #[test]
    fn test_techniques_joined() {
        let solution = KnowledgeBase::new().lookup_problem("soil health");
        let section = generate("soil health", "Bihar", &solution, None);
        assert!(section.contains("Organic compost • Crop rotation • Green manure"));
    }

    #[test]
    fn test_missing_insight_uses_fallback() {
        let solution = KnowledgeBase::new().lookup_problem("irrigation");
        let section = generate("irrigation", "Punjab", &solution, None);
        assert!(section.contains(crate::training::insight::FALLBACK_INSIGHT));

        let section = generate("irrigation", "Punjab", &solution, Some("Custom line."));
        assert!(section.contains("### AI-GENERATED INSIGHT:\nCustom line."));
        assert!(!section.contains(crate::training::insight::FALLBACK_INSIGHT));
    }

    #[test]
    fn test_step_guide_lists_every_step_in_order() {
        let steps = vec!["First".to_string(), "Second".to_string(), "Third".to_string()];
        let guide = generate_step_guide("drought", &steps);

        let implementation = guide.find("Week 3-8").unwrap();
        let evaluation = guide.find("Week 9-12").unwrap();
        let first = guide.find("   - First").unwrap();
        let second = guide.find("   - Second").unwrap();
        let third = guide.find("   - Third").unwrap();

        assert!(implementation < first && first < second && second < third && third < evaluation);
        assert!(guide.contains("   - Evaluate current drought conditions"));
    }
}
