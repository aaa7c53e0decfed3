//! S7: Getting Help

pub const MARKER: &str = "## 📞 GETTING HELP";

pub fn generate(region: &str) -> String {
    format!(
        r#"{}

### LOCAL RESOURCES:
- Contact {} Agriculture Department
- Visit nearest Krishi Vigyan Kendra (KVK)
- Join farmer WhatsApp groups
- Attend local farming workshops

### DIGITAL TOOLS:
- Use weather forecast apps
- Try soil testing mobile apps
- Watch farming tutorial videos
- Join online farmer communities"#,
        MARKER, region
    )
}
