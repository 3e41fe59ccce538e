mod api;
mod config;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::auth;
pub use modules::cv;
pub use modules::session;

use crate::api::openapi::ApiDoc;
use crate::auth::application::ports::outgoing::DashboardTeardown;
use crate::auth::application::use_cases::{
    login_user::{ILoginUserUseCase, LoginUserUseCase},
    logout_user::{ILogoutUseCase, LogoutUseCase},
    signup_user::{ISignupUserUseCase, SignupUserUseCase},
};
use crate::config::{AppConfig, ClientStoreConfig, CvExporterConfig};
use crate::cv::adapter::outgoing::{DataUrlEncoder, JsonFileCvExporter, LogCvExporter};
use crate::cv::application::ports::outgoing::{CvExporter, PictureEncoder};
use crate::cv::application::use_cases::cv_form::{CvFormUseCase, ICvFormUseCase};
use crate::session::adapter::outgoing::{InMemoryClientStore, RedisClientStore};
use crate::session::application::ports::outgoing::ClientStore;
use crate::session::application::use_cases::{
    check_access::{CheckAccessUseCase, ICheckAccessUseCase},
    dark_mode::{DarkModeUseCase, IDarkModeUseCase},
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use deadpool_redis::{Config, Runtime};
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

/// Largest accepted request body, sized for a profile picture upload.
const MAX_PAYLOAD_BYTES: usize = 5 * 1024 * 1024;

#[derive(Clone)]
pub struct AppState {
    pub signup_user_use_case: Arc<dyn ISignupUserUseCase + Send + Sync>,
    pub login_user_use_case: Arc<dyn ILoginUserUseCase + Send + Sync>,
    pub logout_user_use_case: Arc<dyn ILogoutUseCase + Send + Sync>,
    pub check_access_use_case: Arc<dyn ICheckAccessUseCase + Send + Sync>,
    pub dark_mode_use_case: Arc<dyn IDarkModeUseCase + Send + Sync>,
    pub cv_form_use_case: Arc<dyn ICvFormUseCase + Send + Sync>,
    pub client_store: Arc<dyn ClientStore + Send + Sync>,
}

impl AppState {
    pub fn new(
        client_store: Arc<dyn ClientStore + Send + Sync>,
        picture_encoder: Arc<dyn PictureEncoder>,
        cv_exporter: Arc<dyn CvExporter>,
    ) -> Self {
        let cv_form = Arc::new(CvFormUseCase::new(picture_encoder, cv_exporter));
        let teardown: Arc<dyn DashboardTeardown> = cv_form.clone();

        Self {
            signup_user_use_case: Arc::new(SignupUserUseCase::new(client_store.clone())),
            login_user_use_case: Arc::new(LoginUserUseCase::new(client_store.clone())),
            logout_user_use_case: Arc::new(LogoutUseCase::new(client_store.clone(), teardown)),
            check_access_use_case: Arc::new(CheckAccessUseCase::new(client_store.clone())),
            dark_mode_use_case: Arc::new(DarkModeUseCase::new(client_store.clone())),
            cv_form_use_case: cv_form,
            client_store,
        }
    }
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;

    let client_store: Arc<dyn ClientStore + Send + Sync> = match &config.client_store {
        ClientStoreConfig::Memory => {
            info!("Using in-memory client store");
            Arc::new(InMemoryClientStore::new())
        }
        ClientStoreConfig::Redis { url } => {
            let redis_pool = Config::from_url(url)
                .create_pool(Some(Runtime::Tokio1))
                .context("Failed to create Redis pool")?;
            info!("Using Redis client store");
            Arc::new(RedisClientStore::new(Arc::new(redis_pool)))
        }
    };

    let cv_exporter: Arc<dyn CvExporter> = match &config.cv_exporter {
        CvExporterConfig::Log => Arc::new(LogCvExporter),
        CvExporterConfig::JsonFile { dir } => {
            info!(dir = %dir.display(), "Writing generated CVs as JSON files");
            Arc::new(JsonFileCvExporter::new(dir.clone()))
        }
    };

    let state = AppState::new(client_store, Arc::new(DataUrlEncoder), cv_exporter);

    let server_url = config.server_url;
    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::PayloadConfig::new(MAX_PAYLOAD_BYTES))
            .app_data(custom_json_config().limit(MAX_PAYLOAD_BYTES))
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::signup_draft_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_draft_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::login_user_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::logout_user_handler);
    // Session
    cfg.service(crate::session::adapter::incoming::web::routes::dashboard_handler);
    cfg.service(crate::session::adapter::incoming::web::routes::get_dark_mode_handler);
    cfg.service(crate::session::adapter::incoming::web::routes::toggle_dark_mode_handler);
    // CV
    cfg.service(crate::cv::adapter::incoming::web::routes::skill_catalog_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::get_cv_form_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::open_cv_form_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::close_cv_form_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_cv_field_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::upload_picture_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::add_project_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_project_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::remove_project_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::add_education_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::update_education_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::remove_education_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::add_skill_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::remove_skill_handler);
    cfg.service(crate::cv::adapter::incoming::web::routes::submit_cv_handler);
    // Docs
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
