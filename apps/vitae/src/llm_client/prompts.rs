// Prompt text for the cover letter.

/// Cover letter prompt template.
/// Replace: {name}, {language}, {resume_json}, {request}
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"You are writing a professional cover letter for {name}.
Language: {language}.

Resume Data:
{resume_json}

Job Description / User Request:
{request}

Instructions:
- Write a professional and engaging cover letter tailored to the job description/request.
- Use HTML format for the body content (use <p> for paragraphs, <br> for line breaks).
- Do NOT include the header (Name, Address) or closing signature block (Sincerely, Name) as these will be added by the template.
- Focus on the body paragraphs.
- Keep it concise (under 1 page).
- Do NOT wrap the output in markdown code blocks (e.g. ```html)."#;

/// Human-readable language name used in the prompt.
pub fn language_name(code: &str) -> &'static str {
    match code {
        "sv" => "Swedish",
        _ => "English",
    }
}

pub fn cover_letter_prompt(name: &str, language: &str, resume_json: &str, request: &str) -> String {
    fill_placeholders(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("{name}", name),
            ("{language}", language_name(language)),
            ("{resume_json}", resume_json),
            ("{request}", request),
        ],
    )
}

/// Single pass over `template`: inserted values are never scanned again.
fn fill_placeholders(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match values.iter().find(|(key, _)| tail.starts_with(key)) {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
