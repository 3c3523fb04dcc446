//! HTTP error mapping to HTML problem pages

use crate::api::render::RenderError;
use crate::contract::ProjectsError;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

/// Problem details for a failed page request
///
/// Mirrors the RFC-9457 fields but is rendered as a small HTML document since
/// every route of this service answers with HTML.
#[derive(Debug)]
pub struct Problem {
    /// The HTTP status code
    pub status: u16,

    /// A short, human-readable summary of the problem type
    pub title: String,

    /// A human-readable explanation specific to this occurrence
    pub detail: Option<String>,
}

impl Problem {
    /// Create a new problem response
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: title.into(),
            detail: None,
        }
    }

    /// Add detail message
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        // title and detail are fixed strings chosen below, never user input
        let body = format!(
            "<!doctype html>\n<html lang=\"en\">\n<head><meta charset=\"utf-8\"><title>{title}</title></head>\n<body><h1>{title}</h1><p>{detail}</p><p><a href=\"/\">Back to projects</a></p></body>\n</html>\n",
            title = self.title,
            detail = self.detail.unwrap_or_default(),
        );
        (status, Html(body)).into_response()
    }
}

/// Map domain errors left unhandled by a page to a 500 problem page
///
/// Rejected submissions are answered by re-rendering the form, so only
/// failures the user cannot correct end up here.
pub fn map_domain_error(error: ProjectsError) -> Problem {
    if error != ProjectsError::Internal {
        tracing::error!("Unhandled domain error: {}", error);
    }
    internal_error()
}

/// Map template failures to a 500 problem page
pub fn map_render_error(error: RenderError) -> Problem {
    tracing::error!("Render error: {}", error);
    internal_error()
}

fn internal_error() -> Problem {
    Problem::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        .with_detail("An unexpected error occurred")
}
