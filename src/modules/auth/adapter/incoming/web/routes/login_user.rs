use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::application::domain::{LoginForm, LoginFormError};
use crate::auth::application::use_cases::login_user::{LoginError, LoginMatch};
use crate::session::adapter::incoming::web::extractors::client::Client;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub(crate) fn login_error_code(error: &LoginFormError) -> &'static str {
    match error {
        LoginFormError::MissingUsername => "MISSING_USERNAME",
        LoginFormError::MissingPassword => "MISSING_PASSWORD",
    }
}

/// Login request from client
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "ada")]
    #[serde(default)]
    pub username: String,

    #[schema(example = "engine")]
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    #[schema(example = "ada")]
    username: String,

    /// `true` when the pair matched the stored account
    #[schema(example = true)]
    matched_stored_account: bool,

    #[schema(example = "/dashboard")]
    route: String,

    #[schema(example = 1200)]
    redirect_delay_ms: u64,
}

/// Demo login
///
/// Accepts any non-empty username and password. A pair that matches the
/// stored account redirects after 1200ms; anything else is remembered as
/// the current user and redirects after 100ms.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    params(("X-Client-Id" = String, Header, description = "Browser identifier (UUID)")),
    responses(
        (
            status = 200,
            description = "Login accepted",
            body = inline(SuccessResponse<LoginResponse>),
            example = json!({
                "success": true,
                "data": {
                    "username": "ada",
                    "matchedStoredAccount": true,
                    "route": "/dashboard",
                    "redirectDelayMs": 1200
                }
            })
        ),
        (
            status = 400,
            description = "Username or password left blank",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "MISSING_PASSWORD",
                    "message": "Please enter your password!"
                }
            })
        ),
        (status = 500, description = "Client store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_user_handler(
    client: Client,
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();
    let form = LoginForm {
        username: dto.username,
        password: dto.password,
    };

    match data.login_user_use_case.execute(&client.id, form).await {
        Ok(outcome) => ApiResponse::success(LoginResponse {
            username: outcome.username,
            matched_stored_account: outcome.matched == LoginMatch::StoredCredential,
            route: outcome.navigation.route.path().to_string(),
            redirect_delay_ms: outcome.navigation.delay_ms(),
        }),
        Err(LoginError::Form(e)) => {
            warn!(client = %client.id, error = %e, "Login rejected");
            ApiResponse::bad_request(login_error_code(&e), &e.to_string())
        }
        Err(LoginError::Store(e)) => {
            error!(client = %client.id, error = %e, "Login could not reach the client store");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::adapter::incoming::web::extractors::client::CLIENT_ID_HEADER;
    use crate::session::application::{SessionContext, SessionUpdate};
    use crate::session::domain::{ClientId, CredentialRecord};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::UnavailableClientStore;
    use actix_web::{test, App};

    fn login_request(client: &ClientId, username: &str, password: &str) -> test::TestRequest {
        test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header((CLIENT_ID_HEADER, client.to_string()))
            .set_json(serde_json::json!({ "username": username, "password": password }))
    }

    #[actix_web::test]
    async fn test_login_with_stored_account() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let client = ClientId::new();
        SessionUpdate::new()
            .user(CredentialRecord {
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "engine".to_string(),
            })
            .save(store.as_ref(), &client)
        .await
        .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(login_user_handler),
        )
        .await;
        let resp =
            test::call_service(&app, login_request(&client, "ada", "engine").to_request()).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["matchedStoredAccount"], true);
        assert_eq!(body["data"]["redirectDelayMs"], 1200);
        assert_eq!(body["data"]["route"], "/dashboard");
    }

    #[actix_web::test]
    async fn test_login_fallback_for_unknown_pair() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let client = ClientId::new();
        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(login_user_handler),
        )
        .await;

        let resp =
            test::call_service(&app, login_request(&client, "guest", "x").to_request()).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["matchedStoredAccount"], false);
        assert_eq!(body["data"]["redirectDelayMs"], 100);

        let session = SessionContext::load(store.as_ref(), &client).await.unwrap();
        assert!(session.is_authenticated);
        assert_eq!(session.current_user.as_deref(), Some("guest"));
    }

    #[actix_web::test]
    async fn test_login_blank_username() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(login_user_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            login_request(&ClientId::new(), "", "secret").to_request(),
        )
        .await;

        assert_eq!(resp.status(), 400);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "MISSING_USERNAME");
        assert_eq!(body["error"]["message"], "Please enter your username!");
    }

    #[actix_web::test]
    async fn test_login_store_unavailable() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_client_store(UnavailableClientStore)
                        .build(),
                )
                .service(login_user_handler),
        )
        .await;

        let resp = test::call_service(
            &app,
            login_request(&ClientId::new(), "ada", "engine").to_request(),
        )
        .await;

        assert_eq!(resp.status(), 500);
    }
}
