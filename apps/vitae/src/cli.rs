use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::engine::DEFAULT_LANGUAGE;
use crate::models::theme::DEFAULT_THEME_NAME;

#[derive(Parser, Debug)]
#[command(name = "vitae", version, about = "Résumé site, filter engine and PDF exporter")]
pub struct Cli {
    #[arg(long, global = true, help = "Résumé JSON data (overrides RESUME_DATA)")]
    pub data: Option<PathBuf>,
    #[arg(long, global = true, help = "Static asset directory (overrides SITE_DIR)")]
    pub site_dir: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the interactive résumé page.
    Serve {
        #[arg(long, help = "Port to listen on (overrides PORT)")]
        port: Option<u16>,
    },
    /// Write the rendered résumé page to an HTML file.
    Render {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, default_value = "index.out.html")]
        output: PathBuf,
    },
    /// Print the résumé to PDF with a headless browser.
    ExportPdf {
        #[command(flatten)]
        view: ViewArgs,
        #[arg(long, help = "Output file (default: exports/resume-<date>-<lang>-<tags>[-<theme>].pdf)")]
        output: Option<PathBuf>,
    },
    /// Generate a cover letter for a job description and print it to PDF.
    CoverLetter {
        #[arg(long, help = "Job description or request the letter answers")]
        prompt: String,
        #[arg(long, default_value = DEFAULT_LANGUAGE)]
        lang: String,
        #[arg(long, default_value = DEFAULT_THEME_NAME)]
        theme: String,
        #[arg(long, help = "Output file (default: exports/cover-letter-<date>-<lang>.pdf)")]
        output: Option<PathBuf>,
    },
}

/// Language, tag selection and theme of a rendered résumé.
#[derive(Args, Debug, Clone)]
pub struct ViewArgs {
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub lang: String,
    #[arg(long, value_delimiter = ',', help = "Comma separated project tags")]
    pub tags: Vec<String>,
    #[arg(long, default_value = DEFAULT_THEME_NAME)]
    pub theme: String,
}
