//! Module declaration: wires storage, domain service and renderer together

use crate::api::render::Renderer;
use crate::config::Config;
use crate::domain::{ProjectsRepository, Service};
use crate::infra::storage::{migrations::Migrator, repositories::SeaOrmProjectsRepository};
use crate::infra::templates::MiniJinjaRenderer;
use anyhow::Result;
use sea_orm::DatabaseConnection;
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// Projects service module
///
/// Owns the injected dependencies for the page routes. The database connection
/// is created once by the caller and shared by every request.
pub struct ProjectsServiceModule {
    config: Arc<Config>,
    service: Arc<Service>,
    renderer: Arc<dyn Renderer>,
}

impl ProjectsServiceModule {
    /// Build the module on top of an already-migrated database
    pub fn init(config: Config, db: DatabaseConnection) -> Result<Self> {
        let projects_repo = Arc::new(SeaOrmProjectsRepository::new(Arc::new(db)));
        let renderer = Arc::new(MiniJinjaRenderer::new()?);

        tracing::info!("Projects service initialized");
        Ok(Self::with_parts(config, projects_repo, renderer))
    }

    /// Build the module from explicit parts (test doubles, alternative stores)
    pub fn with_parts(
        config: Config,
        projects_repo: Arc<dyn ProjectsRepository>,
        renderer: Arc<dyn Renderer>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(Service::new(projects_repo)),
            renderer,
        }
    }

    /// Page routes with their dependencies attached
    pub fn router(&self) -> axum::Router {
        tracing::info!("Registering projects service routes");
        crate::api::rest::routes::register_routes(
            axum::Router::new(),
            self.service.clone(),
            self.renderer.clone(),
            self.config.clone(),
        )
    }
}

/// Apply pending schema migrations
pub async fn migrate(db: &DatabaseConnection) -> Result<()> {
    Migrator::up(db, None).await?;
    tracing::info!("Projects service migrations completed");
    Ok(())
}
