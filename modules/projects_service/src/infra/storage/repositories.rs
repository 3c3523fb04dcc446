//! SeaORM repository implementations

use crate::contract::{NewProject, Project};
use crate::domain::repository::{ProjectsRepository, RepositoryError};
use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, SqlErr};
use std::sync::Arc;

use super::entity;

pub struct SeaOrmProjectsRepository {
    db: Arc<DatabaseConnection>,
}

impl SeaOrmProjectsRepository {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProjectsRepository for SeaOrmProjectsRepository {
    async fn list_all(&self) -> Result<Vec<Project>, RepositoryError> {
        let results = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&*self.db)
            .await
            .map_err(store_error)?;

        Ok(results.into_iter().map(|e| e.into()).collect())
    }

    async fn insert(&self, project: &NewProject) -> Result<Project, RepositoryError> {
        let active: entity::ActiveModel = project.into();

        match active.insert(&*self.db).await {
            Ok(model) => Ok(model.into()),
            Err(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => Err(RepositoryError::DuplicateName {
                    name: project.name.clone(),
                }),
                _ => Err(store_error(err)),
            },
        }
    }
}

fn store_error(err: DbErr) -> RepositoryError {
    RepositoryError::Store(err.into())
}
