//! Generate Sample Training Modules
//!
//! Generates training modules for a handful of representative requests and
//! saves them (plus a metadata index) to the reports folder.
//! Run with: cargo run --bin generate_sample_modules
//! Output directory: $OUTPUT_DIR (default reports/training_modules)

use std::fs;
use std::path::Path;

use training_module_rust::{ModuleRequest, TrainingModuleGenerator};

const DEFAULT_OUTPUT_DIR: &str = "reports/training_modules";

// (crop, region, problem, language)
const SAMPLE_REQUESTS: &[(&str, &str, &str, &str)] = &[
    ("Rice", "Punjab", "irrigation", "English"),
    ("Wheat", "Haryana", "soil health", "Hindi"),
    ("Tomato", "Karnataka", "pest control", "English"),
    ("Quinoa", "Andes", "drought stress", "English"),
];

fn main() -> anyhow::Result<()> {
    let output_dir = std::env::var("OUTPUT_DIR").unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string());

    println!("Generating sample training modules...\n");

    fs::create_dir_all(&output_dir)?;

    let generator = TrainingModuleGenerator::new();
    let mut index = Vec::with_capacity(SAMPLE_REQUESTS.len());

    for (crop, region, problem, language) in SAMPLE_REQUESTS {
        println!("Generating: {} / {} / {} ({})", crop, region, problem, language);

        let request = ModuleRequest::new(*crop, *region, *problem).with_language(*language);
        let module = generator.generate(&request);

        let filename = format!(
            "module_{}_{}.md",
            crop.to_lowercase(),
            problem.to_lowercase().replace(' ', "_")
        );
        let output_path = Path::new(&output_dir).join(&filename);
        fs::write(&output_path, &module.content)?;
        println!("  Saved: {}", output_path.display());

        index.push(serde_json::json!({
            "file": filename,
            "metadata": module.metadata,
        }));
    }

    let index_path = Path::new(&output_dir).join("index.json");
    fs::write(&index_path, serde_json::to_string_pretty(&index)?)?;
    println!("  Index: {}", index_path.display());

    println!("\nDone! Generated {} training modules.", SAMPLE_REQUESTS.len());
    Ok(())
}
