//! S4: Implementation Tips (do/don't checklist)

pub const MARKER: &str = "## 🛠️ IMPLEMENTATION TIPS";

static DOS: &[&str] = &[
    "Start with small pilot area",
    "Keep detailed records",
    "Monitor daily progress",
    "Seek expert advice when needed",
    "Share results with community",
];

static DONTS: &[&str] = &[
    "Don't implement everything at once",
    "Don't ignore warning signs",
    "Don't skip monitoring",
    "Don't work in isolation",
    "Don't forget to document",
];

pub fn generate() -> String {
    let mut lines = vec![MARKER.to_string(), String::new(), "### DO'S:".to_string()];
    lines.extend(DOS.iter().map(|tip| format!("✓ {}", tip)));
    lines.push(String::new());
    lines.push("### DON'TS:".to_string());
    lines.extend(DONTS.iter().map(|tip| format!("✗ {}", tip)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checklist_marks() {
        let section = generate();
        assert_eq!(section.matches('✓').count(), DOS.len());
        assert_eq!(section.matches('✗').count(), DONTS.len());
        assert!(section.contains("✓ Start with small pilot area"));
        assert!(section.contains("✗ Don't forget to document"));
    }
}
