//! Contract layer - public types shared by every layer
//!
//! Transport-agnostic models and the error type.
//! NO serde derives on models - these are pure domain types.

pub mod error;
pub mod model;

pub use error::ProjectsError;
pub use model::{FieldErrors, NewProject, Project};
