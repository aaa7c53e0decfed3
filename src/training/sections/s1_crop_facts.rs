//! S1: About This Crop
//!
//! Growing facts from the crop profile. Unknown crops show the generic
//! fallback values, so every field is always present.

use crate::training::types::CropProfile;

pub const MARKER: &str = "## 🌾 ABOUT THIS CROP";

/// Generate the S1 crop facts section.
pub fn generate(crop: &CropProfile) -> String {
    let mut lines = Vec::new();

    lines.push(MARKER.to_string());
    lines.push(String::new());
    lines.push(format!("**Crop Name:** {}", crop.name));
    lines.push(format!("**Best Season:** {}", crop.season));
    lines.push(format!("**Water Needs:** {}", crop.water_needs));
    lines.push(format!("**Plant Spacing:** {}", crop.spacing));
    lines.push(format!("**Growth Duration:** {}", crop.duration_days));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::training::KnowledgeBase;

    #[test]
    fn test_crop_facts_lines() {
        let crop = KnowledgeBase::new().lookup_crop("wheat");
        let section = generate(&crop);

        assert!(section.starts_with(MARKER));
        assert!(section.contains("**Crop Name:** Wheat"));
        assert!(section.contains("**Best Season:** Rabi (November to March)"));
        assert!(section.contains("**Water Needs:** 4-6 irrigations, avoid waterlogging"));
        assert!(section.contains("**Plant Spacing:** 5 cm between plants, 22 cm between rows"));
        assert!(section.contains("**Growth Duration:** 110-130 days"));
    }
}
