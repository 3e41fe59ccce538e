use actix_web::{http::header, put, web, HttpRequest, Responder};

use super::errors::cv_form_error_response;
use super::fields::field_update_response;
use crate::cv::domain::ProfileField;
use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::shared::forms::{FieldCommand, FileBlob};
use crate::AppState;

pub const FILE_NAME_HEADER: &str = "X-File-Name";

/// Raw image upload: the body is the file, `Content-Type` its MIME type.
#[put("/api/cv/form/picture")]
pub async fn upload_picture_handler(
    client: DashboardClient,
    req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let Some(mime_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
    else {
        return ApiResponse::bad_request("MISSING_CONTENT_TYPE", "Content-Type header is required");
    };

    let file_name = req
        .headers()
        .get(FILE_NAME_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    let blob = FileBlob::new(file_name, mime_type, body.to_vec());
    let command = FieldCommand::file(ProfileField::ProfilePicture, blob);

    match data.cv_form_use_case.apply_field(&client.id, command).await {
        Ok(update) => field_update_response(update),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}
