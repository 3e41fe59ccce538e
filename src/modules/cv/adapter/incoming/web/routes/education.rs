use actix_web::{delete, patch, post, web, Responder};
use serde::Deserialize;

use super::errors::cv_form_error_response;
use crate::cv::domain::{EducationField, EntryId};
use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateEducationRequest {
    pub field: EducationField,
    pub value: String,
}

#[post("/api/cv/form/education")]
pub async fn add_education_handler(
    client: DashboardClient,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv_form_use_case.add_education(&client.id).await {
        Ok(entry) => ApiResponse::created(entry),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}

#[patch("/api/cv/form/education/{id}")]
pub async fn update_education_handler(
    client: DashboardClient,
    path: web::Path<u64>,
    req: web::Json<UpdateEducationRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = EntryId::from(path.into_inner());
    let UpdateEducationRequest { field, value } = req.into_inner();

    match data
        .cv_form_use_case
        .update_education(&client.id, id, field, value)
        .await
    {
        Ok(entry) => ApiResponse::success(entry),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}

#[delete("/api/cv/form/education/{id}")]
pub async fn remove_education_handler(
    client: DashboardClient,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = EntryId::from(path.into_inner());

    match data.cv_form_use_case.remove_education(&client.id, id).await {
        Ok(entry) => ApiResponse::success(entry),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}
