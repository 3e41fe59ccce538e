pub mod login_form;
pub mod signup_form;

pub use login_form::{LoginField, LoginForm, LoginFormError};
pub use signup_form::{SignupField, SignupForm, SignupFormError};
