//! Domain service - business logic orchestration

use super::repository::{ProjectsRepository, RepositoryError};
use super::validation::validate_new_project;
use crate::contract::{NewProject, Project, ProjectsError};
use std::sync::Arc;

/// Domain service for project management
pub struct Service {
    projects_repo: Arc<dyn ProjectsRepository>,
}

impl Service {
    /// Create a new service instance
    pub fn new(projects_repo: Arc<dyn ProjectsRepository>) -> Self {
        Self { projects_repo }
    }

    /// List all projects in insertion order
    pub async fn list_projects(&self) -> Result<Vec<Project>, ProjectsError> {
        self.projects_repo
            .list_all()
            .await
            .map_err(map_repository_error)
    }

    /// Store a validated project
    pub async fn create_project(&self, project: NewProject) -> Result<Project, ProjectsError> {
        tracing::info!(name = %project.name, "Creating project");
        tracing::debug!(description = %project.description, "Project description");

        let created = self
            .projects_repo
            .insert(&project)
            .await
            .map_err(map_repository_error)?;

        tracing::info!(id = created.id, name = %created.name, "Project created");
        Ok(created)
    }

    /// Validate raw form fields and store the resulting project
    pub async fn submit_project(
        &self,
        name: Option<&str>,
        description: Option<&str>,
    ) -> Result<Project, ProjectsError> {
        let project = validate_new_project(name, description).map_err(|errors| {
            tracing::debug!(%errors, "Rejected project submission");
            ProjectsError::Validation { errors }
        })?;

        self.create_project(project).await
    }
}

fn map_repository_error(error: RepositoryError) -> ProjectsError {
    match error {
        RepositoryError::DuplicateName { name } => {
            tracing::warn!(%name, "Duplicate project name");
            ProjectsError::DuplicateName { name }
        }
        RepositoryError::Store(e) => {
            tracing::error!("Project store failure: {:?}", e);
            ProjectsError::Internal
        }
    }
}
