//! Process command - extract fields from document images.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use idscan_core::{BatchItem, DocumentPipeline, DocumentType, PureOcrEngine};

use crate::output::{format_report, OutputFormat};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "tiff", "tif", "bmp"];

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input files or glob patterns
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Document type code: 1 national ID, 2 tax ID, 3 driving license, 4 passport
    #[arg(short = 't', long)]
    doc_type: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = super::load_config(config_path)?;

    if let Some(model_dir) = &args.model_dir {
        config.ocr.model_dir = model_dir.clone();
    }

    let code = args
        .doc_type
        .as_deref()
        .unwrap_or(&config.extraction.default_doc_type);
    let document_type = DocumentType::from_code(code);

    let files = expand_inputs(&args.inputs)?;
    if files.is_empty() {
        anyhow::bail!("No matching image files found for: {}", args.inputs.join(", "));
    }

    println!(
        "{} Found {} file(s), processing as {}",
        style("ℹ").blue(),
        files.len(),
        document_type
    );

    // Files are read per item so one unreadable match only fails itself
    let items: Vec<BatchItem> = files.iter().map(BatchItem::from_path).collect();

    debug!("Loading OCR models from {}", config.ocr.model_dir.display());
    let engine = PureOcrEngine::from_config(&config.ocr)
        .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))?;
    let pipeline = DocumentPipeline::new(engine);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap(),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Extracting {} file(s)...", items.len()));

    let report = pipeline.process_batch(document_type, &items)?;

    pb.finish_and_clear();

    let output = format_report(&report, args.format)?;
    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    println!(
        "   {} successful, {} failed",
        style(report.summary.successful).green(),
        style(report.summary.failed).red()
    );

    info!("Total processing time: {:?}", start.elapsed());

    if report.is_failure() {
        anyhow::bail!("Failed to extract data from any input file");
    }

    Ok(())
}

/// Expand paths and glob patterns into image files, keeping argument order.
fn expand_inputs(inputs: &[String]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        for path in glob(input)?.filter_map(|r| r.ok()) {
            if is_image(&path) && !files.contains(&path) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn is_image(path: &std::path::Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    IMAGE_EXTENSIONS.contains(&ext.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expand_inputs_filters_non_images() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["a.png", "b.JPG", "notes.txt"] {
            fs::write(dir.path().join(name), b"").unwrap();
        }

        let pattern = dir.path().join("*").to_string_lossy().to_string();
        let files = expand_inputs(&[pattern.clone(), pattern]).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["a.png", "b.JPG"]);
    }
}
