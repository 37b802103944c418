use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// CSS custom property name (e.g. `--color-accent`) to value.
pub type ThemeVariables = BTreeMap<String, String>;

pub const DEFAULT_THEME_NAME: &str = "default";

/// Variable applied to the page background by the cover letter.
pub const PAGE_BACKGROUND_VAR: &str = "--color-page-background";

/// The `config` object of the data file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Name of the theme used when a requested theme is unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    #[serde(default)]
    pub themes: BTreeMap<String, ThemeVariables>,
}

impl Config {
    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.keys().map(String::as_str)
    }

    /// `themes[name]`, falling back to `themes["default"]`.
    pub fn theme_or_default(&self, name: &str) -> Option<&ThemeVariables> {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME_NAME))
    }
}

/// Resolves the variables for `name`: the named theme, then the configured
/// default theme, then the built-in palette. Never fails.
pub fn resolve_theme(config: Option<&Config>, name: &str) -> ThemeVariables {
    config
        .and_then(|c| {
            c.themes.get(name).or_else(|| {
                c.theme
                    .as_deref()
                    .and_then(|fallback| c.themes.get(fallback))
            })
        })
        .cloned()
        .unwrap_or_else(builtin_theme)
}

/// Palette used when the data file configures no usable theme.
pub fn builtin_theme() -> ThemeVariables {
    [
        (PAGE_BACKGROUND_VAR, "#ffffff"),
        ("--color-text", "#374151"),
        ("--color-heading", "#1f2937"),
        ("--color-muted", "#6b7280"),
        ("--color-tag-background", "#e5e7eb"),
        ("--color-accent", "#111827"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}

/// Renders variables as a `:root` rule. The page background is also applied
/// to `body` when the theme sets it.
pub fn to_css(vars: &ThemeVariables) -> String {
    let mut css = String::from(":root {");
    for (name, value) in vars {
        css.push_str(&format!(" {}: {};", sanitize_css(name), sanitize_css(value)));
    }
    css.push_str(" }");
    if let Some(bg) = vars.get(PAGE_BACKGROUND_VAR) {
        css.push_str(&format!(" body {{ background-color: {}; }}", sanitize_css(bg)));
    }
    css
}

/// Keeps theme values from closing the surrounding `<style>` element or rule.
fn sanitize_css(value: &str) -> String {
    value
        .chars()
        .filter(|c| !matches!(c, '<' | '>' | '{' | '}' | ';'))
        .collect()
}
