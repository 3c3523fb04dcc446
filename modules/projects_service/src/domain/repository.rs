//! Repository traits for data access
//!
//! These traits define the interface for data access operations.
//! Implementations are in infra/storage/repositories.rs

use crate::contract::{NewProject, Project};
use async_trait::async_trait;

/// Failures reported by a [`ProjectsRepository`]
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The store rejected the insert because the name is taken
    #[error("project name '{name}' already exists")]
    DuplicateName { name: String },

    /// Any other store failure (connectivity, SQL error, ...)
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Repository for projects
#[async_trait]
pub trait ProjectsRepository: Send + Sync {
    /// List every stored project in ascending id order
    async fn list_all(&self) -> Result<Vec<Project>, RepositoryError>;

    /// Insert a new project and return it with its assigned id
    ///
    /// Fails with [`RepositoryError::DuplicateName`] when the name is already
    /// stored; nothing is written in that case.
    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError>;
}
