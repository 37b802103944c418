// PDF export flows: the filtered résumé page and the generated cover letter.
// Both render a page through the same templates the site uses, write it next
// to the site assets so relative URLs resolve, and hand it to a PdfPrinter.

pub mod cover_letter;
pub mod pdf;
pub mod resume;

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::theme::DEFAULT_THEME_NAME;

pub use pdf::{ChromePrinter, PdfPrinter};

pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// `resume-<date>-<lang>-<tags|All>[-<theme>].pdf`
pub fn resume_file_name(date: NaiveDate, language: &str, tags: &[String], theme: &str) -> String {
    let tags = if tags.is_empty() {
        "-All".to_string()
    } else {
        format!("-{}", tags.join("_"))
    };
    let theme = if theme == DEFAULT_THEME_NAME {
        String::new()
    } else {
        format!("-{theme}")
    };
    format!("resume-{}-{language}{tags}{theme}.pdf", date.format("%Y-%m-%d"))
}

/// `cover-letter-<date>-<lang>.pdf`
pub fn cover_letter_file_name(date: NaiveDate, language: &str) -> String {
    format!("cover-letter-{}-{language}.pdf", date.format("%Y-%m-%d"))
}

/// Makes sure the output can be written: creates the parent directory and
/// deletes a previous file at the same path. A failed delete is logged and
/// the export carries on.
pub async fn prepare_output(output: &Path) -> Result<(), AppError> {
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    if tokio::fs::try_exists(output).await.unwrap_or(false) {
        match tokio::fs::remove_file(output).await {
            Ok(()) => info!("Overwriting existing file: {}", output.display()),
            Err(e) => error!("Error deleting existing file {}: {e}", output.display()),
        }
    }

    Ok(())
}

/// Writes `html` to a temporary file inside `site_dir` and prints it to
/// `output`. The temporary file is removed when printing finishes.
pub async fn print_page(
    html: &str,
    site_dir: &Path,
    output: &Path,
    printer: &dyn PdfPrinter,
) -> Result<(), AppError> {
    tokio::fs::create_dir_all(site_dir).await?;
    let page = tempfile::Builder::new()
        .prefix(".vitae-export-")
        .suffix(".html")
        .tempfile_in(site_dir)?;
    tokio::fs::write(page.path(), html).await?;

    printer.print(page.path(), output).await
}

/// Output path for an export: the explicit path, or `name` inside `exports_dir`.
pub fn output_path(explicit: Option<PathBuf>, exports_dir: &Path, name: String) -> PathBuf {
    explicit.unwrap_or_else(|| exports_dir.join(name))
}
