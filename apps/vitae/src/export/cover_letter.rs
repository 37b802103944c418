use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::info;

use crate::engine::regions::{Field, Region, Regions, Section};
use crate::errors::AppError;
use crate::export::{
    cover_letter_file_name, output_path, prepare_output, print_page, today, PdfPrinter,
};
use crate::llm_client::prompts::cover_letter_prompt;
use crate::llm_client::{strip_code_fences, TextGenerator};
use crate::models::theme::to_css;
use crate::models::{LocalizedResume, ResumeDocument};
use crate::render::{cover_letter_template, html};

#[derive(Debug, Clone)]
pub struct CoverLetterExport {
    /// Job description or free-form request the letter answers.
    pub prompt: String,
    pub language: String,
    pub theme: String,
    pub output: Option<PathBuf>,
}

/// Asks the generator for the letter body (HTML paragraphs).
pub async fn generate_letter_body(
    resume: &LocalizedResume,
    language: &str,
    request: &str,
    generator: &dyn TextGenerator,
) -> Result<String, AppError> {
    let resume_json =
        serde_json::to_string(resume).context("Failed to serialize résumé for the prompt")?;
    let prompt = cover_letter_prompt(&resume.name, language, &resume_json, request);

    info!("Generating cover letter for {} ({language})", resume.name);
    let text = generator.generate(&prompt).await?;
    Ok(strip_code_fences(&text))
}

/// Header (initials, name, contact lines) plus the generated body. The theme
/// is `themes[theme]`, falling back to `themes["default"]`; no theme style
/// is written when neither exists.
pub fn render_cover_letter_page(
    document: &ResumeDocument,
    resume: &LocalizedResume,
    theme: &str,
    body: &str,
) -> String {
    let mut regions = Regions::default();
    regions.write(Region::Field(Field::Name), html::escape_html(&resume.name));
    regions.write(
        Region::Field(Field::Initials),
        html::escape_html(&resume.initials),
    );
    regions.write(
        Region::Section(Section::Contact),
        html::contact_lines(&resume.contact),
    );
    regions.write(Region::Field(Field::Body), body);

    if let Some(vars) = document
        .config
        .as_ref()
        .and_then(|c| c.theme_or_default(theme))
    {
        regions.write(Region::Theme, to_css(vars));
    }

    cover_letter_template().fill(&regions)
}

pub async fn export_cover_letter(
    document: &ResumeDocument,
    request: CoverLetterExport,
    site_dir: &Path,
    exports_dir: &Path,
    generator: &dyn TextGenerator,
    printer: &dyn PdfPrinter,
) -> Result<PathBuf, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let resume = document
        .language(&request.language)
        .ok_or_else(|| AppError::LanguageNotFound(request.language.clone()))?;

    let body = generate_letter_body(resume, &request.language, &request.prompt, generator).await?;
    let html = render_cover_letter_page(document, resume, &request.theme, &body);

    let output = output_path(
        request.output,
        exports_dir,
        cover_letter_file_name(today(), &request.language),
    );
    prepare_output(&output).await?;

    info!("Generating PDF...");
    print_page(&html, site_dir, &output, printer).await?;
    info!("Cover letter generated successfully: {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::*;
    use crate::export::testing::CapturePrinter;
    use crate::llm_client::LlmError;
    use crate::models::resume::fixtures;

    /// Returns a canned reply and records the prompt it was given.
    struct StubGenerator {
        reply: String,
        prompts: Mutex<Vec<String>>,
    }

    impl StubGenerator {
        fn new(reply: &str) -> Self {
            Self {
                reply: reply.to_string(),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(self.reply.clone())
        }
    }

    struct FailingGenerator;

    #[async_trait]
    impl TextGenerator for FailingGenerator {
        async fn generate(&self, _prompt: &str) -> Result<String, LlmError> {
            Err(LlmError::EmptyContent)
        }
    }

    fn request(language: &str) -> CoverLetterExport {
        CoverLetterExport {
            prompt: "Senior Rust engineer at Acme".into(),
            language: language.into(),
            theme: "neon".into(),
            output: None,
        }
    }

    #[tokio::test]
    async fn test_letter_body_strips_fences_and_prompt_carries_resume() {
        let doc = fixtures::document();
        let sv = doc.language("sv").unwrap();
        let generator = StubGenerator::new("```html\n<p>Hej!</p>\n```");

        let body = generate_letter_body(sv, "sv", "Rust role", &generator)
            .await
            .unwrap();
        assert_eq!(body.trim(), "<p>Hej!</p>");

        let prompts = generator.prompts.lock().unwrap();
        assert!(prompts[0].contains("Language: Swedish."));
        assert!(prompts[0].contains("En inbyggd cache."));
        assert!(prompts[0].contains("Rust role"));
    }

    #[test]
    fn test_page_uses_default_theme_for_unknown_name() {
        let doc = fixtures::document();
        let en = doc.language("en").unwrap();
        let page = render_cover_letter_page(&doc, en, "neon", "<p>Body</p>");

        assert!(page.contains("<h1>Ada Lindqvist</h1>"));
        assert!(page.contains(r#"<div class="contact-line">github.com/ada</div>"#));
        assert!(page.contains("<p>Body</p>"));
        assert!(page.contains("body { background-color: #ffffff; }"));
    }

    #[test]
    fn test_page_without_config_has_no_theme() {
        let mut doc = fixtures::document();
        doc.config = None;
        let en = doc.language("en").unwrap().clone();
        let page = render_cover_letter_page(&doc, &en, "default", "<p>Body</p>");
        assert!(page.contains("<style></style>"));
    }

    #[tokio::test]
    async fn test_export_cover_letter_prints_page() {
        let site = tempfile::tempdir().unwrap();
        let exports = tempfile::tempdir().unwrap();
        let printer = CapturePrinter::default();
        let generator = StubGenerator::new("<p>I would like to apply.</p>");

        let output = export_cover_letter(
            &fixtures::document(),
            request("en"),
            site.path(),
            exports.path(),
            &generator,
            &printer,
        )
        .await
        .unwrap();

        let name = output.file_name().unwrap().to_string_lossy().to_string();
        assert!(name.starts_with("cover-letter-") && name.ends_with("-en.pdf"));
        assert!(printer.pages.lock().unwrap()[0].contains("I would like to apply."));
    }

    #[tokio::test]
    async fn test_unknown_language_fails_before_generation() {
        let site = tempfile::tempdir().unwrap();
        let generator = StubGenerator::new("<p>x</p>");
        let err = export_cover_letter(
            &fixtures::document(),
            request("de"),
            site.path(),
            site.path(),
            &generator,
            &CapturePrinter::default(),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::LanguageNotFound(_)));
        assert!(generator.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_generation_failure_propagates() {
        let site = tempfile::tempdir().unwrap();
        let printer = CapturePrinter::default();
        let err = export_cover_letter(
            &fixtures::document(),
            request("en"),
            site.path(),
            site.path(),
            &FailingGenerator,
            &printer,
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Llm(LlmError::EmptyContent)));
        assert!(printer.pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_prompt_rejected() {
        let site = tempfile::tempdir().unwrap();
        let mut req = request("en");
        req.prompt = "   ".into();
        let err = export_cover_letter(
            &fixtures::document(),
            req,
            site.path(),
            site.path(),
            &StubGenerator::new(""),
            &CapturePrinter::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }
}
