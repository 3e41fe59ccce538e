use actix_web::{http::StatusCode, HttpResponse};
use tracing::{error, warn};

use crate::cv::application::use_cases::cv_form::CvFormError;
use crate::session::domain::ClientId;
use crate::shared::api::ApiResponse;

pub(crate) fn cv_form_error_response(client: &ClientId, err: CvFormError) -> HttpResponse {
    match err {
        CvFormError::FormClosed => {
            ApiResponse::conflict("FORM_CLOSED", "Open the CV form before editing it")
        }
        CvFormError::Field(e) => {
            warn!(client = %client, error = %e, "Rejected field command");
            ApiResponse::bad_request("UNSUPPORTED_INPUT", &e.to_string())
        }
        CvFormError::UnsupportedPicture(ref mime) => {
            warn!(client = %client, mime = %mime, "Rejected profile picture");
            ApiResponse::error(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "UNSUPPORTED_PICTURE",
                &err.to_string(),
            )
        }
        CvFormError::Validation(_) => ApiResponse::unprocessable("CV_INCOMPLETE", &err.to_string()),
        CvFormError::Export(e) => {
            error!(client = %client, error = %e, "CV export failed");
            ApiResponse::internal_error()
        }
    }
}
