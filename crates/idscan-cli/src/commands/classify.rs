//! Classify command - guess a document type from text.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;

use idscan_core::classify_document;

/// Arguments for the classify command.
#[derive(Args)]
pub struct ClassifyArgs {
    /// Text file to classify, or `-` for stdin
    #[arg(required = true)]
    input: PathBuf,
}

pub fn run(args: ClassifyArgs) -> anyhow::Result<()> {
    let text = if args.input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        std::fs::read_to_string(&args.input)?
    };

    match classify_document(&text) {
        Some(document_type) => println!("{}", document_type),
        None => println!("unknown"),
    }

    Ok(())
}
