use actix_web::{get, post, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::session::adapter::incoming::web::extractors::client::Client;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DarkModeResponse {
    dark_mode: bool,
}

#[get("/api/preferences/dark-mode")]
pub async fn get_dark_mode_handler(client: Client, data: web::Data<AppState>) -> impl Responder {
    match data.dark_mode_use_case.current(&client.id).await {
        Ok(dark_mode) => ApiResponse::success(DarkModeResponse { dark_mode }),
        Err(e) => {
            error!(client = %client.id, error = %e, "Failed to read theme preference");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/preferences/dark-mode/toggle")]
pub async fn toggle_dark_mode_handler(
    client: Client,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.dark_mode_use_case.toggle(&client.id).await {
        Ok(dark_mode) => ApiResponse::success(DarkModeResponse { dark_mode }),
        Err(e) => {
            error!(client = %client.id, error = %e, "Failed to toggle theme preference");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::adapter::incoming::web::extractors::client::CLIENT_ID_HEADER;
    use crate::session::domain::ClientId;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::UnavailableClientStore;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_toggle_then_read_dark_mode() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_dark_mode_handler)
                .service(toggle_dark_mode_handler),
        )
        .await;
        let client = ClientId::new().to_string();

        let req = test::TestRequest::post()
            .uri("/api/preferences/dark-mode/toggle")
            .insert_header((CLIENT_ID_HEADER, client.clone()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["darkMode"], true);

        let req = test::TestRequest::get()
            .uri("/api/preferences/dark-mode")
            .insert_header((CLIENT_ID_HEADER, client))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["darkMode"], true);
    }

    #[actix_web::test]
    async fn test_dark_mode_defaults_to_light() {
        let app = test::init_service(
            App::new()
                .app_data(TestAppStateBuilder::default().build())
                .service(get_dark_mode_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/preferences/dark-mode")
            .insert_header((CLIENT_ID_HEADER, ClientId::new().to_string()))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["darkMode"], false);
    }

    #[actix_web::test]
    async fn test_toggle_store_failure() {
        let app = test::init_service(
            App::new()
                .app_data(
                    TestAppStateBuilder::default()
                        .with_client_store(UnavailableClientStore)
                        .build(),
                )
                .service(toggle_dark_mode_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/preferences/dark-mode/toggle")
            .insert_header((CLIENT_ID_HEADER, ClientId::new().to_string()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 500);
    }
}
