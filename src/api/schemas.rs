// src/api/schemas.rs
//! OpenAPI views of the `ApiResponse` envelope. Handlers build responses
//! through `ApiResponse`; these types only describe them.
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope around every successful response
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope around every failed response. `data` is omitted.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code, e.g. `MISSING_CLIENT_ID`, `PASSWORD_MISMATCH`,
    /// `FORM_CLOSED`, `CV_INCOMPLETE`
    #[schema(example = "MISSING_CLIENT_ID")]
    pub code: String,

    /// Text shown to the user
    #[schema(example = "Missing or invalid X-Client-Id header")]
    pub message: String,
}
