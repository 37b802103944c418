use std::path::{Path, PathBuf};

use tracing::info;

use crate::dispatch::{view_events, Dispatcher};
use crate::engine::filter::ALL;
use crate::engine::Engine;
use crate::errors::AppError;
use crate::export::{output_path, prepare_output, print_page, resume_file_name, today, PdfPrinter};
use crate::models::ResumeDocument;
use crate::render::resume_template;

/// What to put on the printed résumé.
#[derive(Debug, Clone)]
pub struct ResumeExport {
    pub language: String,
    pub tags: Vec<String>,
    pub theme: String,
    pub output: Option<PathBuf>,
}

/// Renders the full résumé page for a language, theme and tag selection.
/// Unlike the interactive engine, an unknown language is an error here.
pub fn render_resume_page(
    document: ResumeDocument,
    language: &str,
    theme: &str,
    tags: &[String],
) -> Result<String, AppError> {
    if document.language(language).is_none() {
        return Err(AppError::LanguageNotFound(language.to_string()));
    }

    let mut engine = Engine::new();
    engine.initialize(document);
    let mut dispatcher = Dispatcher::new(engine);
    dispatcher.dispatch_all(view_events(language, theme, tags));

    Ok(resume_template().fill(dispatcher.engine().regions()))
}

/// Renders and prints the résumé. Returns the written PDF path.
pub async fn export_resume(
    document: ResumeDocument,
    request: ResumeExport,
    site_dir: &Path,
    exports_dir: &Path,
    printer: &dyn PdfPrinter,
) -> Result<PathBuf, AppError> {
    let html = render_resume_page(document, &request.language, &request.theme, &request.tags)?;

    let output = output_path(
        request.output,
        exports_dir,
        resume_file_name(today(), &request.language, &request.tags, &request.theme),
    );
    prepare_output(&output).await?;

    let tags = if request.tags.is_empty() {
        ALL.to_string()
    } else {
        request.tags.join(", ")
    };
    info!(
        "Generating PDF with: language={} tags={} theme={} output={}",
        request.language,
        tags,
        request.theme,
        output.display()
    );

    print_page(&html, site_dir, &output, printer).await?;
    info!("PDF generated successfully: {}", output.display());
    Ok(output)
}
