use actix_web::{post, web, Responder};
use serde::Serialize;

use super::errors::cv_form_error_response;
use crate::cv::application::use_cases::cv_form::FieldUpdate;
use crate::cv::domain::{PictureTicket, ProfileField};
use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::shared::forms::FieldCommand;
use crate::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct FieldUpdateResponse {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    picture_ticket: Option<PictureTicket>,
}

pub(crate) fn field_update_response(update: FieldUpdate) -> actix_web::HttpResponse {
    match update {
        FieldUpdate::Applied => ApiResponse::success(FieldUpdateResponse {
            status: "applied",
            picture_ticket: None,
        }),
        FieldUpdate::PictureReadStarted(ticket) => ApiResponse::accepted(FieldUpdateResponse {
            status: "pending",
            picture_ticket: Some(ticket),
        }),
    }
}

/// Applies one `FieldCommand` to the profile, e.g.
/// `{"type":"TextFieldChanged","name":"fullName","value":"Ada"}`.
#[post("/api/cv/form/fields")]
pub async fn update_cv_field_handler(
    client: DashboardClient,
    req: web::Json<FieldCommand<ProfileField>>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .cv_form_use_case
        .apply_field(&client.id, req.into_inner())
        .await
    {
        Ok(update) => field_update_response(update),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}
