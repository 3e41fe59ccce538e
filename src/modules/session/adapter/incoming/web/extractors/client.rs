use actix_web::{dev::Payload, web, Error as ActixError, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Future, Ready};
use std::pin::Pin;
use tracing::{debug, error};

use crate::session::application::{GateDecision, SessionContext};
use crate::session::domain::{ClientId, Route};
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const CLIENT_ID_HEADER: &str = "X-Client-Id";

/// The browser a request comes from, identified by `X-Client-Id`.
#[derive(Debug, Clone, Copy)]
pub struct Client {
    pub id: ClientId,
}

fn create_api_error(response: HttpResponse) -> ActixError {
    actix_web::error::InternalError::from_response("", response).into()
}

fn extract_client_id(req: &HttpRequest) -> Option<ClientId> {
    req.headers()
        .get(CLIENT_ID_HEADER)?
        .to_str()
        .ok()?
        .parse()
        .ok()
}

impl FromRequest for Client {
    type Error = ActixError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        match extract_client_id(req) {
            Some(id) => ready(Ok(Client { id })),
            None => ready(Err(create_api_error(ApiResponse::bad_request(
                "MISSING_CLIENT_ID",
                "Missing or invalid X-Client-Id header",
            )))),
        }
    }
}

/// A client that passed the dashboard access gate.
#[derive(Debug, Clone)]
pub struct DashboardClient {
    pub id: ClientId,
    pub session: SessionContext,
}

impl FromRequest for DashboardClient {
    type Error = ActixError;
    type Future = Pin<Box<dyn Future<Output = Result<Self, Self::Error>>>>;

    fn from_request(req: &HttpRequest, payload: &mut Payload) -> Self::Future {
        let client = Client::from_request(req, payload).into_inner();
        let state = req.app_data::<web::Data<AppState>>().cloned();

        Box::pin(async move {
            let client = client?;
            let state = match state {
                Some(state) => state,
                None => return Err(create_api_error(ApiResponse::internal_error())),
            };

            match state
                .check_access_use_case
                .execute(&client.id, Route::Dashboard)
                .await
            {
                Ok(check) => match check.decision {
                    GateDecision::Render(_) => Ok(DashboardClient {
                        id: client.id,
                        session: check.session,
                    }),
                    GateDecision::Redirect(route) => {
                        debug!(client = %client.id, to = route.path(), "Access gate redirect");
                        Err(create_api_error(ApiResponse::unauthorized(
                            "REDIRECT_TO_ENTRY",
                            "Sign up or log in to open the dashboard",
                        )))
                    }
                },
                Err(e) => {
                    error!(client = %client.id, error = %e, "Failed to load session");
                    Err(create_api_error(ApiResponse::internal_error()))
                }
            }
        })
    }
}
