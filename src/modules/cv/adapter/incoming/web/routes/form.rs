use actix_web::{get, post, web, Responder};

use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/api/cv/form")]
pub async fn get_cv_form_handler(
    client: DashboardClient,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.cv_form_use_case.view(&client.id).await)
}

/// Shows the form. Existing entries are kept.
#[post("/api/cv/form/open")]
pub async fn open_cv_form_handler(
    client: DashboardClient,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.cv_form_use_case.open(&client.id).await)
}

#[post("/api/cv/form/close")]
pub async fn close_cv_form_handler(
    client: DashboardClient,
    data: web::Data<AppState>,
) -> impl Responder {
    ApiResponse::success(data.cv_form_use_case.close(&client.id).await)
}
