use chrono::Utc;
use serde::Serialize;
use std::collections::BTreeMap;

use super::entities::{
    CvAggregate, CvProfile, EducationEntry, EntryId, IdSequence, ProjectEntry, SkillTag,
};
use super::fields::{EducationField, ProfileField, ProjectField};
use super::skills::SkillSet;
use super::validation::{self, ValidationFailure};
use crate::shared::forms::{FieldCommand, FieldCommandError, FileBlob};

/// Identifies one picture read. Only the most recent ticket may complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PictureTicket(u64);

/// A picture selection waiting to be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PictureRead {
    pub ticket: PictureTicket,
    pub blob: FileBlob,
}

/// One client's CV form session.
#[derive(Debug, Clone)]
pub struct CvForm {
    profile: CvProfile,
    projects: BTreeMap<EntryId, ProjectEntry>,
    education: BTreeMap<EntryId, EducationEntry>,
    skills: SkillSet,
    ids: IdSequence,
    is_open: bool,
    picture_generation: u64,
    pending_picture: Option<PictureTicket>,
}

/// Read-only picture of a form, as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CvFormView {
    pub is_open: bool,
    pub picture_pending: bool,
    pub profile: CvProfile,
    pub projects: Vec<ProjectEntry>,
    pub education: Vec<EducationEntry>,
    pub skills: Vec<SkillTag>,
}

impl Default for CvForm {
    fn default() -> Self {
        Self::new(IdSequence::now())
    }
}

impl CvForm {
    pub fn new(ids: IdSequence) -> Self {
        Self {
            profile: CvProfile::default(),
            projects: BTreeMap::new(),
            education: BTreeMap::new(),
            skills: SkillSet::default(),
            ids,
            is_open: false,
            picture_generation: 0,
            pending_picture: None,
        }
    }

    pub fn profile(&self) -> &CvProfile {
        &self.profile
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Applies a profile field command. Text replaces the field. A file on
    /// the picture field starts a read and hands back what must be encoded;
    /// the field changes only when that read completes.
    pub fn apply(
        &mut self,
        command: FieldCommand<ProfileField>,
    ) -> Result<Option<PictureRead>, FieldCommandError> {
        match command {
            FieldCommand::TextFieldChanged { name, value } => {
                if name == ProfileField::ProfilePicture {
                    // A direct write wins over any read still in flight.
                    self.pending_picture = None;
                }
                *self.text_field_mut(name) = value;
                Ok(None)
            }
            FieldCommand::FileSelected {
                name: ProfileField::ProfilePicture,
                blob,
            } => Ok(Some(self.begin_picture_read(blob))),
            unsupported @ (FieldCommand::FileSelected { .. }
            | FieldCommand::CheckboxToggled { .. }) => Err(unsupported.unsupported()),
        }
    }

    fn text_field_mut(&mut self, field: ProfileField) -> &mut String {
        let profile = &mut self.profile;
        match field {
            ProfileField::ProfilePicture => &mut profile.profile_picture,
            ProfileField::FullName => &mut profile.full_name,
            ProfileField::Tagline => &mut profile.tagline,
            ProfileField::AboutMe => &mut profile.about_me,
            ProfileField::Email => &mut profile.email,
            ProfileField::Linkedin => &mut profile.linkedin,
            ProfileField::Github => &mut profile.github,
            ProfileField::Website => &mut profile.website,
            ProfileField::PrimaryQualification => &mut profile.primary_education.qualification,
            ProfileField::PrimaryStartDate => &mut profile.primary_education.start_date,
            ProfileField::PrimaryEndDate => &mut profile.primary_education.end_date,
            ProfileField::PrimaryScore => &mut profile.primary_education.score,
        }
    }

    pub fn begin_picture_read(&mut self, blob: FileBlob) -> PictureRead {
        self.picture_generation += 1;
        let ticket = PictureTicket(self.picture_generation);
        self.pending_picture = Some(ticket);
        PictureRead { ticket, blob }
    }

    /// Stores the encoded picture if `ticket` is still the latest read.
    /// Returns `false` for a superseded read, which leaves the form as is.
    pub fn complete_picture_read(&mut self, ticket: PictureTicket, data_url: String) -> bool {
        if self.pending_picture != Some(ticket) {
            return false;
        }
        self.pending_picture = None;
        self.profile.profile_picture = data_url;
        true
    }

    pub fn fail_picture_read(&mut self, ticket: PictureTicket) {
        if self.pending_picture == Some(ticket) {
            self.pending_picture = None;
        }
    }

    pub fn is_picture_pending(&self) -> bool {
        self.pending_picture.is_some()
    }

    pub fn add_project(&mut self) -> ProjectEntry {
        let entry = ProjectEntry::blank(self.ids.next_id());
        self.projects.insert(entry.id, entry.clone());
        entry
    }

    pub fn remove_project(&mut self, id: EntryId) -> Option<ProjectEntry> {
        self.projects.remove(&id)
    }

    pub fn update_project(
        &mut self,
        id: EntryId,
        field: ProjectField,
        value: String,
    ) -> Option<&ProjectEntry> {
        let project = self.projects.get_mut(&id)?;
        match field {
            ProjectField::Title => project.title = value,
            ProjectField::Description => project.description = value,
            ProjectField::Link => project.link = value,
            ProjectField::ImageUrl => project.image_url = value,
        }
        Some(project)
    }

    pub fn add_education(&mut self) -> EducationEntry {
        let entry = EducationEntry::blank(self.ids.next_id());
        self.education.insert(entry.id, entry.clone());
        entry
    }

    pub fn remove_education(&mut self, id: EntryId) -> Option<EducationEntry> {
        self.education.remove(&id)
    }

    pub fn update_education(
        &mut self,
        id: EntryId,
        field: EducationField,
        value: String,
    ) -> Option<&EducationEntry> {
        let entry = self.education.get_mut(&id)?;
        match field {
            EducationField::Qualification => entry.qualification = value,
            EducationField::StartDate => entry.start_date = value,
            EducationField::EndDate => entry.end_date = value,
            EducationField::Score => entry.score = value,
        }
        Some(entry)
    }

    pub fn add_skill(&mut self, value: &str, label: Option<&str>) -> Option<SkillTag> {
        self.skills.add(&mut self.ids, value, label).cloned()
    }

    pub fn remove_skill(&mut self, id: EntryId) -> Option<SkillTag> {
        self.skills.remove(id)
    }

    pub fn validate(&self) -> Result<(), ValidationFailure> {
        validation::check_profile(&self.profile)?;

        if self.projects.is_empty() {
            return Err(ValidationFailure::NoProjects);
        }
        if let Some(project) = self
            .projects
            .values()
            .find(|p| !validation::is_project_valid(p))
        {
            return Err(ValidationFailure::IncompleteProject(project.id));
        }

        if let Some(entry) = self
            .education
            .values()
            .find(|e| !validation::is_education_valid(e))
        {
            return Err(ValidationFailure::IncompleteEducation(entry.id));
        }

        if self.skills.is_empty() {
            return Err(ValidationFailure::NoSkills);
        }

        Ok(())
    }

    pub fn is_form_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Assembles the aggregate after a successful validation.
    pub fn snapshot(&self) -> Result<CvAggregate, ValidationFailure> {
        self.validate()?;

        Ok(CvAggregate {
            profile: self.profile.clone(),
            projects: self.projects.values().cloned().collect(),
            education: self.education.values().cloned().collect(),
            skills: self.skills.iter().cloned().collect(),
            generated_at: Utc::now(),
        })
    }

    pub fn view(&self) -> CvFormView {
        CvFormView {
            is_open: self.is_open,
            picture_pending: self.is_picture_pending(),
            profile: self.profile.clone(),
            projects: self.projects.values().cloned().collect(),
            education: self.education.values().cloned().collect(),
            skills: self.skills.iter().cloned().collect(),
        }
    }
}
