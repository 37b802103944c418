// Region content and page surfaces.
// The engine decides what goes into each region; this module only turns data
// into markup and markup into pages.

pub mod html;
pub mod template;

pub use template::Template;

/// Résumé page. Placeholders are `{{section:..}}`, `{{field:..}}`,
/// `{{label:..}}`, `{{slot:..}}` and `{{theme}}`.
pub const RESUME_TEMPLATE: &str = include_str!("../../templates/index.html");

/// Cover letter page: `{{field:initials}}`, `{{field:name}}`,
/// `{{section:contact}}`, `{{field:body}}` and `{{theme}}`.
pub const COVER_LETTER_TEMPLATE: &str = include_str!("../../templates/cover_letter.html");

pub fn resume_template() -> Template {
    Template::parse(RESUME_TEMPLATE)
}

pub fn cover_letter_template() -> Template {
    Template::parse(COVER_LETTER_TEMPLATE)
}
