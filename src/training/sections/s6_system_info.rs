//! S6: System Information
//!
//! Technology summary plus generation details (timestamp, whether the insight
//! provider was available).

pub const MARKER: &str = "## 🔧 SYSTEM INFORMATION";

pub fn generate(generation_time: &str, ai_used: bool) -> String {
    let ai_status = if ai_used { "Available" } else { "Not available" };

    format!(
        r#"{}

### TECHNOLOGY USED:
- Web Application: Axum (Rust) Web Framework
- Knowledge Base: Agricultural Expert System
- AI Integration: Generative AI System Architecture
- Interface: Responsive Web Design

### GENERATION DETAILS:
- Module Created: {}
- AI Assistance: {}
- Content Type: Personalized farming guidance
- System Status: Operational"#,
        MARKER, generation_time, ai_status
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_status_label() {
        let on = generate("01 January 2025, 09:00 AM", true);
        assert!(on.contains("- AI Assistance: Available"));
        assert!(on.contains("- Module Created: 01 January 2025, 09:00 AM"));

        let off = generate("01 January 2025, 09:00 AM", false);
        assert!(off.contains("- AI Assistance: Not available"));
    }
}
