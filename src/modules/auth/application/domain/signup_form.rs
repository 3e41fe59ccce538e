use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

use crate::session::domain::CredentialRecord;
use crate::shared::forms::{FieldCommand, FieldCommandError, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SignupField {
    Username,
    Email,
    Password,
    ConfirmPassword,
    Agree,
}

impl FormField for SignupField {
    fn as_str(self) -> &'static str {
        match self {
            SignupField::Username => "username",
            SignupField::Email => "email",
            SignupField::Password => "password",
            SignupField::ConfirmPassword => "confirmPassword",
            SignupField::Agree => "agree",
        }
    }
}

/// Signup validation failures, in the order they are checked. The messages
/// are shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupFormError {
    #[error("Please enter a username!")]
    MissingUsername,

    #[error("Please enter a valid E-Mail address!")]
    InvalidEmail,

    #[error("Please enter and confirm your password!")]
    MissingPassword,

    #[error("Passwords do not match!")]
    PasswordMismatch,

    #[error("You must agree to the Terms & Conditions.")]
    AgreementRequired,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub agree: bool,
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"\S+@\S+\.\S+").expect("signup email pattern is valid"))
}

impl SignupForm {
    pub fn apply(&mut self, command: FieldCommand<SignupField>) -> Result<(), FieldCommandError> {
        match command {
            FieldCommand::TextFieldChanged { name, value } => {
                match name {
                    SignupField::Username => self.username = value,
                    SignupField::Email => self.email = value,
                    SignupField::Password => self.password = value,
                    SignupField::ConfirmPassword => self.confirm_password = value,
                    SignupField::Agree => {
                        return Err(FieldCommand::text(name, value).unsupported());
                    }
                }
                Ok(())
            }
            FieldCommand::CheckboxToggled {
                name: SignupField::Agree,
                checked,
            } => {
                self.agree = checked;
                Ok(())
            }
            unsupported @ (FieldCommand::CheckboxToggled { .. }
            | FieldCommand::FileSelected { .. }) => Err(unsupported.unsupported()),
        }
    }

    /// Checks the form and yields the record to store. Values are kept as
    /// typed; only the emptiness checks look at trimmed text.
    pub fn validate(&self) -> Result<CredentialRecord, SignupFormError> {
        if self.username.trim().is_empty() {
            return Err(SignupFormError::MissingUsername);
        }

        if !email_pattern().is_match(&self.email) {
            return Err(SignupFormError::InvalidEmail);
        }

        if self.password.trim().is_empty() || self.confirm_password.trim().is_empty() {
            return Err(SignupFormError::MissingPassword);
        }

        if self.password != self.confirm_password {
            return Err(SignupFormError::PasswordMismatch);
        }

        if !self.agree {
            return Err(SignupFormError::AgreementRequired);
        }

        Ok(CredentialRecord {
            username: self.username.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}
