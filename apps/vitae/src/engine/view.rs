//! Pure projection of one language's résumé through the current filter.

use serde::Serialize;

use crate::engine::filter::{available_tags, FilterState};
use crate::engine::regions::Slot;
use crate::models::{LocalizedResume, Project};

pub const PROJECTS_LABEL: &str = "projects";
pub const RELEVANT_PROJECTS_LABEL: &str = "relevantProjects";

const FALLBACK_PROJECTS_HEADING: &str = "Projects";

/// Which label sits above the project list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingMode {
    Default,
    Relevant,
}

impl HeadingMode {
    pub fn for_filter(filter: &FilterState) -> Self {
        if filter.is_all() {
            HeadingMode::Default
        } else {
            HeadingMode::Relevant
        }
    }

    /// The visible skills layout slot tracks the heading mode.
    pub fn visible_slot(self) -> Slot {
        match self {
            HeadingMode::Default => Slot::Default,
            HeadingMode::Relevant => Slot::Relevant,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagControl {
    pub tag: String,
    pub active: bool,
}

#[derive(Debug, Clone)]
pub struct ResumeView<'a> {
    pub resume: &'a LocalizedResume,
    pub tags: Vec<TagControl>,
    pub projects: Vec<&'a Project>,
    pub heading: HeadingMode,
}

impl<'a> ResumeView<'a> {
    pub fn build(resume: &'a LocalizedResume, filter: &FilterState) -> Self {
        let tags = available_tags(&resume.projects)
            .into_iter()
            .map(|tag| TagControl {
                active: filter.contains(&tag),
                tag,
            })
            .collect();

        Self {
            resume,
            tags,
            projects: filter.apply(&resume.projects),
            heading: HeadingMode::for_filter(filter),
        }
    }

    pub fn visible_slot(&self) -> Slot {
        self.heading.visible_slot()
    }

    /// Text shown above the project list. A missing `relevantProjects` label
    /// falls back to the plain projects label.
    pub fn projects_heading(&self) -> &str {
        let plain = self
            .resume
            .label(PROJECTS_LABEL)
            .unwrap_or(FALLBACK_PROJECTS_HEADING);
        match self.heading {
            HeadingMode::Default => plain,
            HeadingMode::Relevant => self.resume.label(RELEVANT_PROJECTS_LABEL).unwrap_or(plain),
        }
    }
}
