pub mod entities;
pub mod fields;
pub mod form;
pub mod skills;
pub mod validation;

pub use entities::{CvAggregate, CvProfile, EducationEntry, EntryId, ProjectEntry, SkillTag};
pub use fields::{EducationField, ProfileField, ProjectField};
pub use form::{CvForm, CvFormView, PictureRead, PictureTicket};
pub use skills::{SkillOption, SKILL_CATALOG};
pub use validation::{ValidationFailure, CV_VALIDATION_MESSAGE};
