use serde::Deserialize;

use crate::shared::forms::FormField;

/// Profile fields addressable by a `FieldCommand`. The names the browser
/// form used are accepted as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProfileField {
    #[serde(alias = "profilePicUrl")]
    ProfilePicture,
    FullName,
    Tagline,
    AboutMe,
    Email,
    Linkedin,
    Github,
    Website,
    #[serde(alias = "presentEd")]
    PrimaryQualification,
    #[serde(alias = "startYear")]
    PrimaryStartDate,
    #[serde(alias = "endYear")]
    PrimaryEndDate,
    #[serde(alias = "percentage")]
    PrimaryScore,
}

impl FormField for ProfileField {
    fn as_str(self) -> &'static str {
        match self {
            ProfileField::ProfilePicture => "profilePicture",
            ProfileField::FullName => "fullName",
            ProfileField::Tagline => "tagline",
            ProfileField::AboutMe => "aboutMe",
            ProfileField::Email => "email",
            ProfileField::Linkedin => "linkedin",
            ProfileField::Github => "github",
            ProfileField::Website => "website",
            ProfileField::PrimaryQualification => "primaryQualification",
            ProfileField::PrimaryStartDate => "primaryStartDate",
            ProfileField::PrimaryEndDate => "primaryEndDate",
            ProfileField::PrimaryScore => "primaryScore",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectField {
    Title,
    Description,
    Link,
    ImageUrl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EducationField {
    Qualification,
    #[serde(alias = "startYear")]
    StartDate,
    #[serde(alias = "endYear")]
    EndDate,
    #[serde(alias = "percentage")]
    Score,
}
