use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::models::theme::Config;

/// The whole résumé data file: one `LocalizedResume` per language code, plus
/// the optional `config` object that sits beside the language keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResumeDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<Config>,
    #[serde(flatten)]
    pub languages: BTreeMap<String, LocalizedResume>,
}

impl ResumeDocument {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn language(&self, code: &str) -> Option<&LocalizedResume> {
        self.languages.get(code)
    }

    /// Language codes in sorted order.
    pub fn language_codes(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizedResume {
    pub name: String,
    pub initials: String,
    #[serde(default)]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub contact: Vec<ContactItem>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub about: Vec<AboutItem>,
}

impl LocalizedResume {
    pub fn label(&self, key: &str) -> Option<&str> {
        self.labels.get(key).map(String::as_str)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactItem {
    pub text: String,
    #[serde(default)]
    pub is_link: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// How an experience entry's `content` is laid out.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    List,
    #[default]
    Text,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum ExperienceContent {
    Items(Vec<String>),
    Text(String),
}

impl ExperienceContent {
    /// Flattens list content into one paragraph.
    pub fn as_text(&self) -> String {
        match self {
            ExperienceContent::Items(items) => items.join(", "),
            ExperienceContent::Text(text) => text.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Experience {
    pub company: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<ExperienceContent>,
    #[serde(rename = "type", default)]
    pub kind: ContentKind,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Education {
    pub institution: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(default)]
    pub description: String,
}

impl Project {
    pub fn tags(&self) -> &[String] {
        self.tags.as_deref().unwrap_or_default()
    }

    /// True when at least one of the project's tags is in `active`.
    /// Untagged projects never match.
    pub fn has_any_tag(&self, active: &BTreeSet<String>) -> bool {
        self.tags().iter().any(|t| active.contains(t))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AboutItem {
    pub title: String,
    #[serde(default)]
    pub period: String,
    #[serde(default)]
    pub description: String,
}
