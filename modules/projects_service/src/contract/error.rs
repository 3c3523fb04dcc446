//! Contract error types for projects service
//!
//! These errors are transport-agnostic; the REST layer decides how each one is
//! presented to the user.

use super::model::FieldErrors;

/// Projects service domain errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectsError {
    /// A project with this name is already stored
    #[error("Project name already exists: {name}")]
    DuplicateName {
        /// The rejected name
        name: String,
    },
    /// The submission failed validation
    #[error("Validation error: {errors}")]
    Validation {
        /// Per-field messages
        errors: FieldErrors,
    },
    /// Internal error (store unavailable, unexpected failure)
    #[error("Internal error")]
    Internal,
}
