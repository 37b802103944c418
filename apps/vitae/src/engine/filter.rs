//! Project tag filter.
//!
//! The active set is never empty. `ALL` means "no filtering" and never
//! coexists with a concrete tag.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::models::Project;

/// Sentinel tag meaning "show every project".
pub const ALL: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterState {
    active: BTreeSet<String>,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            active: BTreeSet::from([ALL.to_string()]),
        }
    }
}

impl FilterState {
    /// Selecting `ALL` clears every concrete tag. Selecting a concrete tag
    /// drops `ALL` and flips that tag; removing the last concrete tag
    /// reinstates `ALL`.
    pub fn toggle(&mut self, tag: &str) {
        if tag == ALL {
            self.reset();
            return;
        }

        self.active.remove(ALL);

        if !self.active.remove(tag) {
            self.active.insert(tag.to_string());
        }

        if self.active.is_empty() {
            self.active.insert(ALL.to_string());
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// True when the set is exactly `{ALL}`.
    pub fn is_all(&self) -> bool {
        self.active.len() == 1 && self.active.contains(ALL)
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.active.contains(tag)
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.active
    }

    pub fn matches(&self, project: &Project) -> bool {
        self.is_all() || project.has_any_tag(&self.active)
    }

    /// Projects passing the filter, input order preserved.
    pub fn apply<'a>(&self, projects: &'a [Project]) -> Vec<&'a Project> {
        projects.iter().filter(|p| self.matches(p)).collect()
    }
}

/// `ALL` followed by every project tag in order of first appearance.
pub fn available_tags(projects: &[Project]) -> Vec<String> {
    let mut tags = vec![ALL.to_string()];
    for tag in projects.iter().flat_map(|p| p.tags()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}
