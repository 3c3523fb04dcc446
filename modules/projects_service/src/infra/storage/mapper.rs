//! Entity to model mappers
//!
//! Conversions between SeaORM entities and contract models

use super::entity;
use crate::contract::{NewProject, Project};

impl From<entity::Model> for Project {
    fn from(entity: entity::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description.unwrap_or_default(),
        }
    }
}

impl From<&NewProject> for entity::ActiveModel {
    fn from(model: &NewProject) -> Self {
        use sea_orm::ActiveValue::*;

        Self {
            id: NotSet,
            name: Set(model.name.clone()),
            description: Set(Some(model.description.clone())),
        }
    }
}
