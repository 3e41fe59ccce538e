use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::login_user::login_error_code;
use super::signup_user::signup_error_code;
use crate::auth::application::domain::{LoginField, LoginForm, SignupField, SignupForm};
use crate::shared::api::ApiResponse;
use crate::shared::forms::FieldCommand;

/// The form as the browser holds it, plus the edit to fold in.
#[derive(Debug, Deserialize)]
pub struct SignupDraftRequest {
    #[serde(default)]
    pub form: SignupForm,
    pub command: FieldCommand<SignupField>,
}

#[derive(Debug, Deserialize)]
pub struct LoginDraftRequest {
    #[serde(default)]
    pub form: LoginForm,
    pub command: FieldCommand<LoginField>,
}

#[derive(Debug, Serialize)]
pub struct DraftError {
    code: &'static str,
    message: String,
}

/// Updated form and the first check it currently fails, if any.
#[derive(Debug, Serialize)]
pub struct DraftResponse<F> {
    form: F,
    error: Option<DraftError>,
}

/// Applies one field edit to a signup form without storing anything, e.g.
/// `{"form":{...},"command":{"type":"CheckboxToggled","name":"agree","checked":true}}`.
#[post("/api/auth/signup/draft")]
pub async fn signup_draft_handler(req: web::Json<SignupDraftRequest>) -> impl Responder {
    let SignupDraftRequest { mut form, command } = req.into_inner();

    if let Err(e) = form.apply(command) {
        debug!(error = %e, "Signup draft edit rejected");
        return ApiResponse::bad_request("UNSUPPORTED_INPUT", &e.to_string());
    }

    let error = form.validate().err().map(|e| DraftError {
        code: signup_error_code(&e),
        message: e.to_string(),
    });
    ApiResponse::success(DraftResponse { form, error })
}

#[post("/api/auth/login/draft")]
pub async fn login_draft_handler(req: web::Json<LoginDraftRequest>) -> impl Responder {
    let LoginDraftRequest { mut form, command } = req.into_inner();

    if let Err(e) = form.apply(command) {
        debug!(error = %e, "Login draft edit rejected");
        return ApiResponse::bad_request("UNSUPPORTED_INPUT", &e.to_string());
    }

    let error = form.validate().err().map(|e| DraftError {
        code: login_error_code(&e),
        message: e.to_string(),
    });
    ApiResponse::success(DraftResponse { form, error })
}
