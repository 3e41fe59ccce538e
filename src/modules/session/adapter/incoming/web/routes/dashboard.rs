use actix_web::{get, Responder};
use serde::Serialize;

use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::session::domain::Route;
use crate::shared::api::ApiResponse;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    route: Route,
    current_user: Option<String>,
    dark_mode: bool,
}

/// The gated route. Unauthenticated clients never reach the body: the
/// extractor answers `401 REDIRECT_TO_ENTRY`.
#[get("/api/dashboard")]
pub async fn dashboard_handler(client: DashboardClient) -> impl Responder {
    let current_user = client
        .session
        .current_user
        .or_else(|| client.session.user.map(|user| user.username));

    ApiResponse::success(DashboardResponse {
        route: Route::Dashboard,
        current_user,
        dark_mode: client.session.dark_mode,
    })
}
