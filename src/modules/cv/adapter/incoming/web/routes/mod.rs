mod education;
mod errors;
mod fields;
mod form;
mod picture;
mod projects;
mod skills;
mod submit;

pub use education::{add_education_handler, remove_education_handler, update_education_handler};
pub use fields::update_cv_field_handler;
pub use form::{close_cv_form_handler, get_cv_form_handler, open_cv_form_handler};
pub use picture::upload_picture_handler;
pub use projects::{add_project_handler, remove_project_handler, update_project_handler};
pub use skills::{add_skill_handler, remove_skill_handler, skill_catalog_handler};
pub use submit::submit_cv_handler;
