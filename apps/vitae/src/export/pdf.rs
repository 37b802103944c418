//! HTML → PDF through a headless Chromium.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::errors::AppError;

/// Milliseconds the page may settle (fonts, transitions) before printing.
const SETTLE_BUDGET_MS: u32 = 500;

/// Prints an HTML file on disk to a PDF file.
///
/// Page size and margins come from the page's own `@page` rule (A4, no margin).
#[async_trait]
pub trait PdfPrinter: Send + Sync {
    async fn print(&self, html: &Path, output: &Path) -> Result<(), AppError>;
}

/// Shells out to `chromium --headless --print-to-pdf`.
#[derive(Debug, Clone)]
pub struct ChromePrinter {
    binary: String,
}

impl ChromePrinter {
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    fn args(&self, page_url: &str, output: &Path) -> Vec<String> {
        vec![
            "--headless".to_string(),
            "--disable-gpu".to_string(),
            "--no-pdf-header-footer".to_string(),
            "--run-all-compositor-stages-before-draw".to_string(),
            format!("--virtual-time-budget={SETTLE_BUDGET_MS}"),
            format!("--print-to-pdf={}", output.display()),
            page_url.to_string(),
        ]
    }
}

#[async_trait]
impl PdfPrinter for ChromePrinter {
    async fn print(&self, html: &Path, output: &Path) -> Result<(), AppError> {
        let page = tokio::fs::canonicalize(html).await?;
        let page_url = format!("file://{}", page.display());
        let args = self.args(&page_url, output);
        debug!("{} {}", self.binary, args.join(" "));

        let result = Command::new(&self.binary)
            .args(&args)
            .output()
            .await
            .map_err(|e| AppError::Print(format!("cannot run '{}': {e}", self.binary)))?;

        if !result.status.success() {
            return Err(AppError::Print(format!(
                "'{}' exited with {}: {}",
                self.binary,
                result.status,
                String::from_utf8_lossy(&result.stderr).trim()
            )));
        }

        if !tokio::fs::try_exists(output).await.unwrap_or(false) {
            return Err(AppError::Print(format!(
                "'{}' finished but wrote no file at {}",
                self.binary,
                output.display()
            )));
        }

        Ok(())
    }
}
