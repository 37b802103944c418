mod cli;
mod config;
mod dispatch;
mod engine;
mod errors;
mod export;
mod llm_client;
mod loader;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Commands, ViewArgs};
use crate::config::Config;
use crate::dispatch::Dispatcher;
use crate::engine::Engine;
use crate::export::cover_letter::{export_cover_letter, CoverLetterExport};
use crate::export::resume::{export_resume, render_resume_page, ResumeExport};
use crate::export::ChromePrinter;
use crate::llm_client::LlmClient;
use crate::loader::load_document;
use crate::render::resume_template;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(data) = cli.data {
        config.data_path = data;
    }
    if let Some(site_dir) = cli.site_dir {
        config.site_dir = site_dir;
    }

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={},tower_http={}",
                env!("CARGO_PKG_NAME"),
                &config.rust_log,
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { port } => serve(&config, port.unwrap_or(config.port)).await,
        Commands::Render { view, output } => render_to_file(&config, view, output).await,
        Commands::ExportPdf { view, output } => export_pdf(&config, view, output).await,
        Commands::CoverLetter {
            prompt,
            lang,
            theme,
            output,
        } => {
            let request = CoverLetterExport {
                prompt,
                language: lang,
                theme,
                output,
            };
            cover_letter(&config, request).await
        }
    }
}

async fn serve(config: &Config, port: u16) -> Result<()> {
    info!("Starting vitae v{}", env!("CARGO_PKG_VERSION"));

    // A failed load leaves the engine empty: the page is served unrendered.
    let mut engine = Engine::new();
    match load_document(&config.data_path).await {
        Ok(document) => engine.initialize(document),
        Err(e) => error!("Error loading resume data: {e}"),
    }

    let state = AppState::new(Dispatcher::new(engine), resume_template());
    let app = build_router(state, &config.site_dir).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn render_to_file(config: &Config, view: ViewArgs, output: PathBuf) -> Result<()> {
    let document = load_document(&config.data_path).await?;
    let html = render_resume_page(document, &view.lang, &view.theme, &view.tags)?;
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;
    info!("Wrote {}", output.display());
    Ok(())
}

async fn export_pdf(config: &Config, view: ViewArgs, output: Option<PathBuf>) -> Result<()> {
    let document = load_document(&config.data_path).await?;
    let printer = ChromePrinter::new(config.chrome_bin.clone());
    let request = ResumeExport {
        language: view.lang,
        tags: view.tags,
        theme: view.theme,
        output,
    };

    export_resume(
        document,
        request,
        &config.site_dir,
        &config.exports_dir,
        &printer,
    )
    .await?;
    Ok(())
}

async fn cover_letter(config: &Config, request: CoverLetterExport) -> Result<()> {
    let api_key = config.require_gemini_api_key()?;
    let llm = LlmClient::new(api_key.to_string())?;
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    let document = load_document(&config.data_path).await?;
    let printer = ChromePrinter::new(config.chrome_bin.clone());

    export_cover_letter(
        &document,
        request,
        &config.site_dir,
        &config.exports_dir,
        &llm,
        &printer,
    )
    .await?;
    Ok(())
}
