use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use super::entities::{CvProfile, EducationEntry, EntryId, ProjectEntry};

pub const CV_VALIDATION_MESSAGE: &str =
    "Please fill all required fields correctly before submitting.";

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex compiles"))
}

fn url_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(https?://)?([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]+(/[A-Za-z0-9_\- ./?%&=]*)?$")
            .expect("url regex compiles")
    })
}

pub fn is_email_valid(email: &str) -> bool {
    email_regex().is_match(email)
}

/// Empty counts as valid: links are optional.
pub fn is_url_valid(url: &str) -> bool {
    url.is_empty() || url_regex().is_match(url)
}

pub fn is_project_valid(project: &ProjectEntry) -> bool {
    !project.title.is_empty() && !project.description.is_empty() && is_url_valid(&project.link)
}

pub fn is_education_valid(education: &EducationEntry) -> bool {
    !education.qualification.is_empty()
        && !education.start_date.is_empty()
        && !education.end_date.is_empty()
        && !education.score.is_empty()
}

/// The first rule a form broke. Only logged; callers get
/// [`CV_VALIDATION_MESSAGE`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    MissingRequiredField(&'static str),
    InvalidEmail,
    InvalidUrl(&'static str),
    NoProjects,
    IncompleteProject(EntryId),
    IncompleteEducation(EntryId),
    NoSkills,
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationFailure::MissingRequiredField(field) => {
                write!(f, "required field `{field}` is empty")
            }
            ValidationFailure::InvalidEmail => write!(f, "email address is malformed"),
            ValidationFailure::InvalidUrl(field) => write!(f, "`{field}` is not a valid URL"),
            ValidationFailure::NoProjects => write!(f, "no projects"),
            ValidationFailure::IncompleteProject(id) => write!(f, "project {id} is incomplete"),
            ValidationFailure::IncompleteEducation(id) => {
                write!(f, "education entry {id} is incomplete")
            }
            ValidationFailure::NoSkills => write!(f, "no skills selected"),
        }
    }
}

pub(crate) fn check_profile(profile: &CvProfile) -> Result<(), ValidationFailure> {
    let primary = &profile.primary_education;
    let required = [
        ("fullName", &profile.full_name),
        ("tagline", &profile.tagline),
        ("aboutMe", &profile.about_me),
        ("email", &profile.email),
        ("primaryQualification", &primary.qualification),
        ("primaryStartDate", &primary.start_date),
        ("primaryEndDate", &primary.end_date),
        ("primaryScore", &primary.score),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationFailure::MissingRequiredField(*field));
    }

    if !is_email_valid(&profile.email) {
        return Err(ValidationFailure::InvalidEmail);
    }

    let links = [
        ("linkedin", &profile.linkedin),
        ("github", &profile.github),
        ("website", &profile.website),
    ];
    if let Some((field, _)) = links.iter().find(|(_, url)| !is_url_valid(url)) {
        return Err(ValidationFailure::InvalidUrl(*field));
    }

    Ok(())
}
