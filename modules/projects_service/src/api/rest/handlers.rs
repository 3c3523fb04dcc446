//! HTTP request handlers - thin layer that delegates to domain service

use super::{
    dto::{IndexPage, ProjectForm, UpdatePage},
    error::{map_domain_error, map_render_error, Problem},
};
use crate::api::render::{Renderer, View};
use crate::config::Config;
use crate::contract::{FieldErrors, ProjectsError};
use crate::domain::Service;
use axum::{
    body::Bytes,
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Serialize;
use std::sync::Arc;

// ===== Read pages =====

/// Listing page with every stored project
pub async fn list_projects(
    service: Arc<Service>,
    renderer: Arc<dyn Renderer>,
    config: Arc<Config>,
) -> Result<Html<String>, Problem> {
    let projects = service.list_projects().await.map_err(map_domain_error)?;

    let page = IndexPage {
        title: config.listing_title.clone(),
        all_projects: projects.into_iter().map(|p| p.into()).collect(),
    };

    render_page(renderer.as_ref(), View::Index, &page).map(Html)
}

/// Static contact page
pub async fn contact(renderer: Arc<dyn Renderer>) -> Result<Html<String>, Problem> {
    render_page(renderer.as_ref(), View::Contact, &serde_json::json!({})).map(Html)
}

/// Static about page
pub async fn about(renderer: Arc<dyn Renderer>) -> Result<Html<String>, Problem> {
    render_page(renderer.as_ref(), View::About, &serde_json::json!({})).map(Html)
}

// ===== Project form =====

/// Empty submission form
pub async fn new_project_form(renderer: Arc<dyn Renderer>) -> Result<Html<String>, Problem> {
    render_page(renderer.as_ref(), View::Update, &UpdatePage::default()).map(Html)
}

/// Validate and store a submitted project, then redirect to the listing
///
/// The body is decoded as a urlencoded form whatever its content type.
/// Undecodable or invalid submissions re-render the form with 400, duplicate
/// names with 409.
pub async fn submit_project(
    service: Arc<Service>,
    renderer: Arc<dyn Renderer>,
    body: Bytes,
) -> Result<Response, Problem> {
    let (form, decode_errors) = ProjectForm::from_urlencoded(&body);
    if !decode_errors.is_empty() {
        tracing::debug!(errors = %decode_errors, "Undecodable project submission");
        return rejected_form(renderer.as_ref(), StatusCode::BAD_REQUEST, &form, &decode_errors);
    }

    let result = service
        .submit_project(form.name.as_deref(), form.description.as_deref())
        .await;

    match result {
        Ok(_) => Ok(Redirect::to("/").into_response()),
        Err(ProjectsError::Validation { errors }) => {
            rejected_form(renderer.as_ref(), StatusCode::BAD_REQUEST, &form, &errors)
        }
        Err(ProjectsError::DuplicateName { name }) => {
            let mut errors = FieldErrors::new();
            errors.add("name", format!("A project named '{}' already exists.", name));
            rejected_form(renderer.as_ref(), StatusCode::CONFLICT, &form, &errors)
        }
        Err(e) => Err(map_domain_error(e)),
    }
}

fn rejected_form(
    renderer: &dyn Renderer,
    status: StatusCode,
    form: &ProjectForm,
    errors: &FieldErrors,
) -> Result<Response, Problem> {
    let html = render_page(renderer, View::Update, &UpdatePage::rejected(form, errors))?;
    Ok((status, Html(html)).into_response())
}

fn render_page<T: Serialize>(
    renderer: &dyn Renderer,
    view: View,
    page: &T,
) -> Result<String, Problem> {
    let context = serde_json::to_value(page).map_err(|e| {
        tracing::error!("Failed to serialize page context: {}", e);
        map_domain_error(ProjectsError::Internal)
    })?;

    renderer.render(view, context).map_err(map_render_error)
}
