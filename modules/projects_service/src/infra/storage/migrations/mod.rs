//! Database migrations for projects service

use sea_orm_migration::prelude::*;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20241210_000001_create_project::Migration)]
    }
}

mod m20241210_000001_create_project {
    use super::*;

    #[derive(DeriveMigrationName)]
    pub struct Migration;

    #[async_trait::async_trait]
    impl MigrationTrait for Migration {
        async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .create_table(
                    Table::create()
                        .table(Project::Table)
                        .if_not_exists()
                        .col(
                            ColumnDef::new(Project::Id)
                                .integer()
                                .not_null()
                                .auto_increment()
                                .primary_key(),
                        )
                        .col(ColumnDef::new(Project::Name).string_len(255).not_null())
                        .col(ColumnDef::new(Project::Description).text())
                        .to_owned(),
                )
                .await?;

            // Uniqueness of names is enforced by this index
            manager
                .create_index(
                    Index::create()
                        .name("ix_project_name")
                        .table(Project::Table)
                        .col(Project::Name)
                        .unique()
                        .if_not_exists()
                        .to_owned(),
                )
                .await?;

            Ok(())
        }

        async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
            manager
                .drop_table(Table::drop().table(Project::Table).to_owned())
                .await
        }
    }

    #[derive(DeriveIden)]
    enum Project {
        Table,
        Id,
        Name,
        Description,
    }
}
