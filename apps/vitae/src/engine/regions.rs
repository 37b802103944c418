//! Named output regions and the map the engine writes them into.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    Experience,
    Education,
    Projects,
    Skills,
    Contact,
    About,
    /// Tag filter controls.
    Filters,
    /// Language switch controls.
    Languages,
    /// Theme picker.
    Themes,
}

impl Section {
    pub const ALL: [Section; 9] = [
        Section::Experience,
        Section::Education,
        Section::Projects,
        Section::Skills,
        Section::Contact,
        Section::About,
        Section::Filters,
        Section::Languages,
        Section::Themes,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
            Section::Skills => "skills",
            Section::Contact => "contact",
            Section::About => "about",
            Section::Filters => "filters",
            Section::Languages => "languages",
            Section::Themes => "themes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Initials,
    ProjectsHeading,
    /// Free-form page body, used by the cover letter.
    Body,
}

impl Field {
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Initials => "initials",
            Field::ProjectsHeading => "projectsHeading",
            Field::Body => "body",
        }
    }
}

/// The two alternate skills layouts; exactly one is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Default,
    Relevant,
}

impl Slot {
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Default => "default",
            Slot::Relevant => "relevant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    Section(Section),
    Field(Field),
    Label(String),
    Slot(Slot),
    Theme,
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Region::Section(s) => write!(f, "section:{}", s.as_str()),
            Region::Field(field) => write!(f, "field:{}", field.as_str()),
            Region::Label(key) => write!(f, "label:{key}"),
            Region::Slot(slot) => write!(f, "slot:{}", slot.as_str()),
            Region::Theme => f.write_str("theme"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown region key '{0}'")]
pub struct UnknownRegion(pub String);

impl FromStr for Region {
    type Err = UnknownRegion;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let unknown = || UnknownRegion(key.to_string());

        if key == "theme" {
            return Ok(Region::Theme);
        }

        let (kind, name) = key.split_once(':').ok_or_else(unknown)?;
        match kind {
            "section" => Section::ALL
                .into_iter()
                .find(|s| s.as_str() == name)
                .map(Region::Section)
                .ok_or_else(unknown),
            "field" => [Field::Name, Field::Initials, Field::ProjectsHeading, Field::Body]
                .into_iter()
                .find(|f| f.as_str() == name)
                .map(Region::Field)
                .ok_or_else(unknown),
            "slot" => [Slot::Default, Slot::Relevant]
                .into_iter()
                .find(|s| s.as_str() == name)
                .map(Region::Slot)
                .ok_or_else(unknown),
            "label" if !name.is_empty() => Ok(Region::Label(name.to_string())),
            _ => Err(unknown()),
        }
    }
}

impl Serialize for Region {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Content currently written to each region. Writing replaces the previous
/// content; regions never written stay absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Regions {
    content: BTreeMap<Region, String>,
}

impl Regions {
    pub fn write(&mut self, region: Region, content: impl Into<String>) {
        self.content.insert(region, content.into());
    }

    pub fn get(&self, region: &Region) -> Option<&str> {
        self.content.get(region).map(String::as_str)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.content.len()
    }
}
