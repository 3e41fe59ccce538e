use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::{
    LoginRequestDto, LoginResponse, LogoutResponseBody, SignupRequestDto, SignupResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "CV Builder API",
        version = "1.0.0",
        description = "Demo authentication and CV form endpoints"
    ),
    paths(
        crate::auth::adapter::incoming::web::routes::signup_user_handler,
        crate::auth::adapter::incoming::web::routes::login_user_handler,
        crate::auth::adapter::incoming::web::routes::logout_user_handler,
    ),
    components(
        schemas(
            SuccessResponse<SignupResponse>,
            ErrorResponse,
            ErrorDetail,
            SignupRequestDto,
            SignupResponse,
            LoginRequestDto,
            LoginResponse,
            LogoutResponseBody
        )
    ),
    tags(
        (name = "auth", description = "Demo signup, login and logout"),
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_paths_documented() {
        let doc = ApiDoc::openapi();

        for path in ["/api/auth/signup", "/api/auth/login", "/api/auth/logout"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
