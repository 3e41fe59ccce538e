use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::session::adapter::incoming::web::extractors::client::Client;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponseBody {
    #[schema(example = "/")]
    route: String,

    #[schema(example = 0)]
    redirect_delay_ms: u64,
}

/// Logout
///
/// Clears the authenticated flag and current user, and discards any open
/// CV form. The stored account is kept.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    params(("X-Client-Id" = String, Header, description = "Browser identifier (UUID)")),
    responses(
        (
            status = 200,
            description = "Logged out",
            body = inline(SuccessResponse<LogoutResponseBody>),
            example = json!({
                "success": true,
                "data": { "route": "/", "redirectDelayMs": 0 }
            })
        ),
        (status = 400, description = "Client id missing", body = ErrorResponse),
        (status = 500, description = "Client store unavailable", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_user_handler(client: Client, data: web::Data<AppState>) -> impl Responder {
    match data.logout_user_use_case.execute(&client.id).await {
        Ok(navigation) => ApiResponse::success(LogoutResponseBody {
            route: navigation.route.path().to_string(),
            redirect_delay_ms: navigation.delay_ms(),
        }),
        Err(e) => {
            error!(client = %client.id, error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::adapter::incoming::web::extractors::client::CLIENT_ID_HEADER;
    use crate::session::application::{SessionContext, SessionUpdate};
    use crate::session::domain::ClientId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_logout_clears_session() {
        let builder = TestAppStateBuilder::default();
        let store = builder.store();
        let client = ClientId::new();
        SessionUpdate::new()
            .authenticated(true)
            .current_user(Some("guest".to_string()))
            .save(store.as_ref(), &client)
        .await
        .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(builder.build())
                .service(logout_user_handler),
        )
        .await;
        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header((CLIENT_ID_HEADER, client.to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["route"], "/");
        assert_eq!(body["data"]["redirectDelayMs"], 0);

        let session = SessionContext::load(store.as_ref(), &client).await.unwrap();
        assert!(!session.is_authenticated);
        assert_eq!(session.current_user, None);
    }

    #[actix_web::test]
    async fn test_logout_requires_client_id() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(logout_user_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 400);
    }
}
