use actix_web::{delete, get, post, web, Responder};
use serde::Deserialize;

use super::errors::cv_form_error_response;
use crate::cv::domain::{EntryId, SKILL_CATALOG};
use crate::session::adapter::incoming::web::extractors::client::DashboardClient;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AddSkillRequest {
    pub value: String,
    #[serde(default, alias = "text")]
    pub label: Option<String>,
}

#[get("/api/cv/skills/catalog")]
pub async fn skill_catalog_handler() -> impl Responder {
    ApiResponse::success(SKILL_CATALOG)
}

/// `201` with the new tag, or `200` with `data: null` when the value was
/// empty or already selected.
#[post("/api/cv/form/skills")]
pub async fn add_skill_handler(
    client: DashboardClient,
    req: web::Json<AddSkillRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let AddSkillRequest { value, label } = req.into_inner();

    match data.cv_form_use_case.add_skill(&client.id, value, label).await {
        Ok(Some(skill)) => ApiResponse::created(skill),
        Ok(None) => ApiResponse::success(None::<()>),
        Err(e) => cv_form_error_response(&client.id, e),
    }
}

#[delete("/api/cv/form/skills/{id}")]
pub async fn remove_skill_handler(
    client: DashboardClient,
    path: web::Path<u64>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = EntryId::from(path.into_inner());

    match data.cv_form_use_case.remove_skill(&client.id, id).await {
        Ok(skill) => ApiResponse::success(skill),
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
    async fn test_catalog_lists_options() {
        let app = test::init_service(App::new().service(skill_catalog_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/cv/skills/catalog")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        let options = body["data"].as_array().unwrap();
        assert_eq!(options.len(), 8);
        assert_eq!(options[5], json!({"value": "nodejs", "label": "Node.js"}));
    }

    #[actix_web::test]
    async fn test_duplicate_skill_is_ignored() {
        let builder = TestAppStateBuilder::default();
        let client = authenticated_client(builder.store().as_ref()).await;
        let state = builder.build();
        state.cv_form_use_case.open(&client).await;
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(add_skill_handler),
        )
        .await;

        let add_html = || {
            test::TestRequest::post()
                .uri("/api/cv/form/skills")
                .insert_header(client_header(&client))
                .set_json(json!({"value": "html", "text": "HTML"}))
                .to_request()
        };

        let resp = test::call_service(&app, add_html()).await;
        assert_eq!(resp.status(), 201);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["label"], "HTML");

        let resp = test::call_service(&app, add_html()).await;
        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert!(body["data"].is_null());

        assert_eq!(state.cv_form_use_case.view(&client).await.skills.len(), 1);
    }

    #[actix_web::test]
    async fn test_remove_skill() {
        let builder = TestAppStateBuilder::default();
        let client = authenticated_client(builder.store().as_ref()).await;
        let state = builder.build();
        state.cv_form_use_case.open(&client).await;
        let skill = state
            .cv_form_use_case
            .add_skill(&client, "react".to_string(), None)
            .await
            .unwrap()
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(state.clone())
                .service(remove_skill_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/cv/form/skills/{}", skill.id))
            .insert_header(client_header(&client))
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["data"]["value"], "react");
        assert!(state.cv_form_use_case.view(&client).await.skills.is_empty());
    }
}
