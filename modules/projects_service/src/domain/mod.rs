//! Domain layer - business logic and services

pub mod repository;
pub mod service;
pub mod validation;

pub use repository::{ProjectsRepository, RepositoryError};
pub use service::Service;
