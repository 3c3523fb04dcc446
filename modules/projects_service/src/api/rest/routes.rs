//! Route registration

use super::{error::Problem, handlers};
use crate::api::render::Renderer;
use crate::config::Config;
use crate::domain::Service;
use axum::{
    body::Bytes,
    response::{Html, Response},
    routing::get,
    Extension, Router,
};
use std::sync::Arc;

/// Register all page routes
pub fn register_routes(
    router: Router,
    service: Arc<Service>,
    renderer: Arc<dyn Renderer>,
    config: Arc<Config>,
) -> Router {
    router
        .route("/", get(index_handler))
        .route("/contact", get(contact_handler))
        .route("/about", get(about_handler))
        .route("/update", get(update_form_handler).post(submit_project_handler))
        // Shared dependencies for handlers
        .layer(Extension(service))
        .layer(Extension(renderer))
        .layer(Extension(config))
}

// ===== Handler wrappers that extract dependencies from Extension =====

async fn index_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(renderer): Extension<Arc<dyn Renderer>>,
    Extension(config): Extension<Arc<Config>>,
) -> Result<Html<String>, Problem> {
    handlers::list_projects(service, renderer, config).await
}

async fn contact_handler(
    Extension(renderer): Extension<Arc<dyn Renderer>>,
) -> Result<Html<String>, Problem> {
    handlers::contact(renderer).await
}

async fn about_handler(
    Extension(renderer): Extension<Arc<dyn Renderer>>,
) -> Result<Html<String>, Problem> {
    handlers::about(renderer).await
}

async fn update_form_handler(
    Extension(renderer): Extension<Arc<dyn Renderer>>,
) -> Result<Html<String>, Problem> {
    handlers::new_project_form(renderer).await
}

async fn submit_project_handler(
    Extension(service): Extension<Arc<Service>>,
    Extension(renderer): Extension<Arc<dyn Renderer>>,
    body: Bytes,
) -> Result<Response, Problem> {
    handlers::submit_project(service, renderer, body).await
}
