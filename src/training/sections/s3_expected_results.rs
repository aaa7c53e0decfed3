//! S3: Expected Results
//!
//! Fixed improvement ranges. These are not computed from the input; only the
//! problem name is interpolated.

pub const MARKER: &str = "## 📊 EXPECTED RESULTS";

pub fn generate(problem: &str) -> String {
    format!(
        r#"{}

### QUANTITATIVE IMPROVEMENTS:
- {} management: 40-60% better
- Crop yield increase: 20-35%
- Input cost reduction: 15-25%
- Labor efficiency: 20-30% improvement

### QUALITATIVE BENEFITS:
- Healthier crops
- Better soil quality
- More sustainable farming
- Increased confidence in farming"#,
        MARKER, problem
    )
}
