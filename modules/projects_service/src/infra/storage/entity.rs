//! SeaORM entities for database tables

use sea_orm::entity::prelude::*;

/// Project table entity
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "project")]
pub struct Model {
    /// Auto-assigned primary key
    #[sea_orm(primary_key)]
    pub id: i32,

    /// Unique project name (indexed)
    #[sea_orm(unique)]
    pub name: String,

    /// Free-text description; nullable at the storage layer
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
