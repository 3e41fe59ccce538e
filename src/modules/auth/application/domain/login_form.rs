use serde::{Deserialize, Serialize};

use crate::shared::forms::{FieldCommand, FieldCommandError, FormField};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LoginField {
    Username,
    Password,
}

impl FormField for LoginField {
    fn as_str(self) -> &'static str {
        match self {
            LoginField::Username => "username",
            LoginField::Password => "password",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginFormError {
    #[error("Please enter your username!")]
    MissingUsername,

    #[error("Please enter your password!")]
    MissingPassword,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn apply(&mut self, command: FieldCommand<LoginField>) -> Result<(), FieldCommandError> {
        match command {
            FieldCommand::TextFieldChanged { name, value } => {
                match name {
                    LoginField::Username => self.username = value,
                    LoginField::Password => self.password = value,
                }
                Ok(())
            }
            unsupported @ (FieldCommand::CheckboxToggled { .. }
            | FieldCommand::FileSelected { .. }) => Err(unsupported.unsupported()),
        }
    }

    pub fn validate(&self) -> Result<(), LoginFormError> {
        if self.username.trim().is_empty() {
            return Err(LoginFormError::MissingUsername);
        }

        if self.password.trim().is_empty() {
            return Err(LoginFormError::MissingPassword);
        }

        Ok(())
    }
}
