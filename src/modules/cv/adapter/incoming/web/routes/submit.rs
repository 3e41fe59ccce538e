use actix_web::{post, web, Responder};
use serde::Serialize;

use super::errors::cv_form_error_response;
use crate::cv::domain::CvAggregate;
use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct SubmitCvResponse {
    message: &'static str,
    cv: CvAggregate,
}

#[post("/api/cv/form/submit")]
pub async fn submit_cv_handler(
    client: DashboardClient,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv_form_use_case.submit(&client.id).await {
        Ok(submitted) => ApiResponse::success(SubmitCvResponse {
            message: submitted.message,
            cv: submitted.cv,
        }),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}
