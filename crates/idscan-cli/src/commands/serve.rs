//! Serve command - run the HTTP extraction service.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;
use tracing::{debug, info};

use idscan_core::{DocumentType, PureOcrEngine};

use crate::server::{router, AppState};

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to bind (default from config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (default from config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Model directory
    #[arg(short, long)]
    model_dir: Option<PathBuf>,

    /// Document type code used when a request omits `docType`
    #[arg(short = 't', long)]
    doc_type: Option<String>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = super::load_config(config_path)?;

    if let Some(model_dir) = args.model_dir {
        config.ocr.model_dir = model_dir;
    }
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(doc_type) = args.doc_type {
        config.extraction.default_doc_type = doc_type;
    }

    debug!("Loading OCR models from {}", config.ocr.model_dir.display());
    let engine = PureOcrEngine::from_config(&config.ocr)
        .map_err(|e| anyhow::anyhow!("Failed to load OCR models: {}", e))?;

    let state = Arc::new(AppState::new(
        Box::new(engine),
        config.extraction.default_doc_type.clone(),
    ));
    let app = router(state, config.server.max_body_bytes);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", addr, e))?;

    println!(
        "{} Listening on http://{} (default document type: {})",
        style("✓").green(),
        addr,
        DocumentType::from_code(&config.extraction.default_doc_type)
    );
    info!(addr = %addr, "Extraction service started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Extraction service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
    }
}
