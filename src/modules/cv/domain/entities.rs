use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a list entry inside one form session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for EntryId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out entry ids for one form. Starts at the creation millisecond and
/// only ever moves forward, so ids are unique across all lists of the form
/// and never come back after a removal. Map order by id is insertion order.
#[derive(Debug, Clone)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    pub fn starting_at(seed: u64) -> Self {
        Self { next: seed }
    }

    pub fn now() -> Self {
        let millis = u64::try_from(Utc::now().timestamp_millis()).unwrap_or_default();
        Self::starting_at(millis)
    }

    pub fn next_id(&mut self) -> EntryId {
        let id = EntryId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PrimaryEducation {
    pub qualification: String,
    pub start_date: String,
    pub end_date: String,
    pub score: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvProfile {
    /// `data:<mime>;base64,<payload>` once a picture was read
    pub profile_picture: String,
    pub full_name: String,
    pub tagline: String,
    pub about_me: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
    pub primary_education: PrimaryEducation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub description: String,
    pub link: String,
    pub image_url: String,
}

impl ProjectEntry {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            title: String::new(),
            description: String::new(),
            link: String::new(),
            image_url: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub id: EntryId,
    pub qualification: String,
    pub start_date: String,
    pub end_date: String,
    pub score: String,
}

impl EducationEntry {
    pub fn blank(id: EntryId) -> Self {
        Self {
            id,
            qualification: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            score: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillTag {
    pub id: EntryId,
    /// Canonical key, unique within a form
    pub value: String,
    pub label: String,
}

/// The submitted CV. Built once per successful submission and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvAggregate {
    #[serde(flatten)]
    pub profile: CvProfile,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillTag>,
    pub generated_at: DateTime<Utc>,
}
