//! Render/filter engine.
//!
//! Owns the loaded document and the UI state (language, tag filter, theme),
//! and writes the content of every named region on each render pass. No
//! operation here returns an error: a missing document or language turns a
//! render into a no-op and leaves the previously written regions in place.

pub mod filter;
pub mod regions;
pub mod view;

use serde::Serialize;
use tracing::{debug, info};

use crate::models::theme::{resolve_theme, to_css, DEFAULT_THEME_NAME};
use crate::models::ResumeDocument;
use crate::render::html;

use self::filter::FilterState;
use self::regions::{Field, Region, Regions, Section, Slot};
use self::view::{HeadingMode, ResumeView, TagControl};

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(Debug, Clone)]
pub struct Engine {
    document: Option<ResumeDocument>,
    language: String,
    filter: FilterState,
    theme: String,
    regions: Regions,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Read-only summary of the engine state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub language: String,
    pub theme: String,
    pub active_tags: Vec<String>,
    pub available_tags: Vec<TagControl>,
    pub heading: HeadingMode,
    pub visible_slot: Slot,
    /// `None` when the current language is not in the document.
    pub project_count: Option<usize>,
}

impl Engine {
    /// An engine with no document. Every render is a no-op until
    /// `initialize` is called.
    pub fn new() -> Self {
        Self {
            document: None,
            language: DEFAULT_LANGUAGE.to_string(),
            filter: FilterState::default(),
            theme: DEFAULT_THEME_NAME.to_string(),
            regions: Regions::default(),
        }
    }

    pub fn initialize(&mut self, document: ResumeDocument) {
        info!(
            "Engine initialized with {} language(s)",
            document.languages.len()
        );
        self.document = Some(document);
        self.language = DEFAULT_LANGUAGE.to_string();
        self.filter.reset();
        self.render();
    }

    /// Switches language. The tag filter is always reset because tags differ
    /// between languages.
    pub fn set_language(&mut self, code: &str) {
        debug!("Language -> {code}");
        self.language = code.to_string();
        self.filter.reset();
        self.render();
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.filter.toggle(tag);
        debug!("Filter -> {:?}", self.filter.tags());
        self.render();
    }

    /// Selects a theme. Unknown names fall back to the configured default and
    /// then to the built-in palette.
    pub fn set_theme(&mut self, name: &str) {
        debug!("Theme -> {name}");
        self.theme = name.to_string();
        self.render();
    }

    #[cfg(test)]
    pub fn language(&self) -> &str {
        &self.language
    }

    #[cfg(test)]
    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn regions(&self) -> &Regions {
        &self.regions
    }

    pub fn snapshot(&self) -> Snapshot {
        let resume = self
            .document
            .as_ref()
            .and_then(|d| d.language(&self.language));
        let heading = HeadingMode::for_filter(&self.filter);

        Snapshot {
            language: self.language.clone(),
            theme: self.theme.clone(),
            active_tags: self.filter.tags().iter().cloned().collect(),
            available_tags: resume
                .map(|r| ResumeView::build(r, &self.filter).tags)
                .unwrap_or_default(),
            heading,
            visible_slot: heading.visible_slot(),
            project_count: resume.map(|r| self.filter.apply(&r.projects).len()),
        }
    }

    /// Rewrites every region from the current state. Leaves the regions
    /// untouched when the current language has no data.
    pub fn render(&mut self) {
        let Some(document) = self.document.as_ref() else {
            debug!("Render skipped: no document loaded");
            return;
        };
        let Some(resume) = document.language(&self.language) else {
            debug!(
                "Render skipped: language '{}' not in document",
                self.language
            );
            return;
        };

        let view = ResumeView::build(resume, &self.filter);
        let regions = &mut self.regions;

        let vars = resolve_theme(document.config.as_ref(), &self.theme);
        regions.write(Region::Theme, to_css(&vars));

        for (key, text) in &resume.labels {
            regions.write(Region::Label(key.clone()), html::escape_html(text));
        }
        regions.write(Region::Field(Field::Name), html::escape_html(&resume.name));
        regions.write(
            Region::Field(Field::Initials),
            html::escape_html(&resume.initials),
        );
        regions.write(
            Region::Field(Field::ProjectsHeading),
            html::escape_html(view.projects_heading()),
        );

        regions.write(
            Region::Section(Section::Experience),
            html::experience(&resume.experience),
        );
        regions.write(
            Region::Section(Section::Education),
            html::education(&resume.education),
        );
        regions.write(
            Region::Section(Section::Projects),
            html::projects(&view.projects),
        );
        regions.write(Region::Section(Section::Skills), html::skills(&resume.skills));
        regions.write(
            Region::Section(Section::Contact),
            html::contact(&resume.contact),
        );
        regions.write(Region::Section(Section::About), html::about(&resume.about));

        regions.write(Region::Section(Section::Filters), html::filters(&view.tags));
        regions.write(
            Region::Section(Section::Languages),
            html::languages(document.language_codes(), &self.language),
        );
        regions.write(
            Region::Section(Section::Themes),
            document
                .config
                .as_ref()
                .map(|c| html::themes(c.theme_names(), &self.theme))
                .unwrap_or_default(),
        );

        let visible = view.visible_slot();
        for slot in [Slot::Default, Slot::Relevant] {
            let class = if slot == visible { "" } else { "hidden" };
            regions.write(Region::Slot(slot), class);
        }
    }
}
