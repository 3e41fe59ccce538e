use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::{SignupForm, SignupFormError};
use crate::auth::application::use_cases::signup_user::SignupError;
use crate::session::adapter::incoming::web::extractors::client::Client;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Signup form as the browser submits it
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequestDto {
    #[schema(example = "ada")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "ada@example.com")]
    #[serde(default)]
    pub email: String,

    #[schema(example = "engine")]
    #[serde(default)]
    pub password: String,

    #[schema(example = "engine")]
    #[serde(default)]
    pub confirm_password: String,

    /// Terms & Conditions checkbox
    #[schema(example = true)]
    #[serde(default)]
    pub agree: bool,
}

impl From<SignupRequestDto> for SignupForm {
    fn from(dto: SignupRequestDto) -> Self {
        SignupForm {
            username: dto.username,
            email: dto.email,
            password: dto.password,
            confirm_password: dto.confirm_password,
            agree: dto.agree,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    #[schema(example = "Sign Up Form Submitted Successfully!")]
    message: String,

    #[schema(example = "ada")]
    username: String,

    /// Path to navigate to
    #[schema(example = "/dashboard")]
    route: String,

    /// How long the loading indicator stays up before navigating
    #[schema(example = 1200)]
    redirect_delay_ms: u64,
}

pub(crate) fn signup_error_code(error: &SignupFormError) -> &'static str {
    match error {
        SignupFormError::MissingUsername => "MISSING_USERNAME",
        SignupFormError::InvalidEmail => "INVALID_EMAIL",
        SignupFormError::MissingPassword => "MISSING_PASSWORD",
        SignupFormError::PasswordMismatch => "PASSWORD_MISMATCH",
        SignupFormError::AgreementRequired => "TERMS_NOT_ACCEPTED",
    }
}

/// Demo signup
///
/// Stores the credentials in the client's store and marks it authenticated.
#[utoipa::path(
    post,
    path = "/api/auth/signup",
    tag = "auth",
    request_body = SignupRequestDto,
    params(("X-Client-Id" = String, Header, description = "Browser identifier (UUID)")),
    responses(
        (
            status = 201,
            description = "Account stored",
            body = inline(SuccessResponse<SignupResponse>),
            example = json!({
                "success": true,
                "data": {
                    "message": "Sign Up Form Submitted Successfully!",
                    "username": "ada",
                    "route": "/dashboard",
                    "redirectDelayMs": 1200
                }
            })
        ),
        (
            status = 400,
            description = "Form validation failed or client id missing",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "PASSWORD_MISMATCH",
                    "message": "Passwords do not match!"
                }
            })
        ),
        (status = 500, description = "Client store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/signup")]
pub async fn signup_user_handler(
    client: Client,
    req: web::Json<SignupRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let form: SignupForm = req.into_inner().into();

    match data.signup_user_use_case.execute(&client.id, form).await {
        Ok(outcome) => {
            info!(client = %client.id, username = %outcome.username, "Signup succeeded");
            ApiResponse::created(SignupResponse {
                message: outcome.message.to_string(),
                username: outcome.username,
                route: outcome.navigation.route.path().to_string(),
                redirect_delay_ms: outcome.navigation.delay_ms(),
            })
        }
        Err(SignupError::Form(e)) => {
            warn!(client = %client.id, error = %e, "Signup rejected");
            ApiResponse::bad_request(signup_error_code(&e), &e.to_string())
        }
        Err(SignupError::Store(e)) => {
            error!(client = %client.id, error = %e, "Signup could not reach the client store");
            ApiResponse::internal_error()
        }
    }
}
