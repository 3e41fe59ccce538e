use actix_web::{delete, patch, post, web, Responder};
use serde::Deserialize;

use super::errors::cv_form_error_response;
use crate::cv::domain::{EntryId, ProjectField};
use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct UpdateProjectRequest {
    pub field: ProjectField,
    pub value: String,
}

/// Appends a blank project and returns it.
#[post("/api/cv/form/projects")]
pub async fn add_project_handler(
    client: DashboardClient,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.cv_form_use_case.add_project(&client.id).await {
        Ok(project) => ApiResponse::created(project),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}

/// Replaces one field. Responds with `data: null` when the id is unknown.
#[patch("/api/cv/form/projects/{id}")]
pub async fn update_project_handler(
    client: DashboardClient,
    path: web::Path<u64>,
    req: web::Json<UpdateProjectRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = EntryId::from(path.into_inner());
    let UpdateProjectRequest { field, value } = req.into_inner();

    match data
        .cv_form_use_case
        .update_project(&client.id, id, field, value)
        .await
    {
        Ok(project) => ApiResponse::success(project),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}

#[delete("/api/cv/form/projects/{id}")]
pub async fn remove_project_handler(
    client: DashboardClient,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = EntryId::from(path.into_inner());

    match data.cv_form_use_case.remove_project(&client.id, id).await {
        Ok(project) => ApiResponse::success(project),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{authenticated_client, client_header};
    use actix_web::{test, App};
    use serde_json::json;

    #[actix_web::test]
    async fn test_project_lifecycle() {
        let builder = TestAppStateBuilder::default();
        let client = authenticated_client(builder.store().as_ref()).await;
        let state = builder.build();
        state.cv_form_use_case.open(&client).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(add_project_handler)
                .service(update_project_handler)
                .service(remove_project_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/cv/form/projects")
            .insert_header(client_header(&client))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        let id = body["data"]["id"].as_u64().unwrap();
        assert_eq!(body["data"]["title"], "");

        let req = test::TestRequest::patch()
            .uri(&format!("/api/cv/form/projects/{id}"))
            .insert_header(client_header(&client))
            .set_json(json!({"field": "imageUrl", "value": "https://img.example.com/a.png"}))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], id);
        assert_eq!(body["data"]["imageUrl"], "https://img.example.com/a.png");

        let req = test::TestRequest::delete()
            .uri(&format!("/api/cv/form/projects/{id}"))
            .insert_header(client_header(&client))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["data"]["id"], id);
        assert!(state.cv_form_use_case.view(&client).await.projects.is_empty());
    }

    #[actix_web::test]
    async fn test_removing_unknown_project_is_noop() {
        let builder = TestAppStateBuilder::default();
        let client = authenticated_client(builder.store().as_ref()).await;
        let state = builder.build();
        state.cv_form_use_case.open(&client).await;
        state.cv_form_use_case.add_project(&client).await.unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(remove_project_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri("/api/cv/form/projects/1")
            .insert_header(client_header(&client))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"].is_null());
        assert_eq!(state.cv_form_use_case.view(&client).await.projects.len(), 1);
    }
}
