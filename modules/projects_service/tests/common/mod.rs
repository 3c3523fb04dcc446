//! Common test utilities: databases, mock repository and HTTP helpers

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, Response},
};
use parking_lot::RwLock;
use projects_service::domain::{ProjectsRepository, RepositoryError};
use projects_service::{NewProject, Project};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::sync::Arc;

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Fresh in-memory SQLite database with migrations applied
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn sqlite_memory_db() -> DatabaseConnection {
    let mut opts = ConnectOptions::new("sqlite::memory:");
    opts.max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(opts).await.expect("connect to in-memory sqlite");
    projects_service::module::migrate(&db)
        .await
        .expect("run migrations");
    db
}

// ===== Mock repository =====

/// In-memory repository mirroring the store's id and uniqueness rules
#[derive(Clone, Default)]
pub struct MockProjectsRepo {
    rows: Arc<RwLock<Vec<Project>>>,
    unavailable: Arc<RwLock<bool>>,
}

impl MockProjectsRepo {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail like an unreachable store
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write() = unavailable;
    }

    pub fn count(&self) -> usize {
        self.rows.read().len()
    }

    pub fn rows(&self) -> Vec<Project> {
        self.rows.read().clone()
    }

    fn check_available(&self) -> Result<(), RepositoryError> {
        if *self.unavailable.read() {
            return Err(RepositoryError::Store(anyhow::anyhow!("connection refused")));
        }
        Ok(())
    }
}

#[async_trait]
impl ProjectsRepository for MockProjectsRepo {
    async fn list_all(&self) -> Result<Vec<Project>, RepositoryError> {
        self.check_available()?;
        Ok(self.rows.read().clone())
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        self.check_available()?;
        let mut rows = self.rows.write();
        if rows.iter().any(|p| p.name == project.name) {
            return Err(RepositoryError::DuplicateName {
                name: project.name.clone(),
            });
        }

        let id = rows.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Project {
            id,
            name: project.name.clone(),
            description: project.description.clone(),
        };
        rows.push(created.clone());
        Ok(created)
    }
}

// ===== HTTP helpers =====

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("build GET request")
}

/// POST an `application/x-www-form-urlencoded` body
pub fn post_form(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("build POST request")
}

/// POST a body without any `Content-Type` header
pub fn post_raw(uri: &str, body: &'static [u8]) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::from(body))
        .expect("build POST request")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read response body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}
