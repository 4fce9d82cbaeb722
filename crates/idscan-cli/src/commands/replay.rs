//! Replay command - run extraction on recorded OCR fragments.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use idscan_core::{extract_fields, DocumentType, RecognizedFragment};

use crate::output::{format_record, OutputFormat};

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// JSON file with `[{"text": ..., "confidence": ...}]`, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,

    /// Document type code: 1 national ID, 2 tax ID, 3 driving license, 4 passport
    #[arg(short = 't', long, default_value = "1")]
    doc_type: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub fn run(args: ReplayArgs) -> anyhow::Result<()> {
    let content = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };

    let fragments: Vec<RecognizedFragment> = serde_json::from_str(&content)
        .map_err(|e| anyhow::anyhow!("Invalid fragment file: {}", e))?;

    let document_type = DocumentType::from_code(&args.doc_type);
    debug!("Replaying {} fragments as {}", fragments.len(), document_type);

    let record = extract_fields(document_type, &fragments);
    println!("{}", format_record(&record, args.format)?);

    Ok(())
}
