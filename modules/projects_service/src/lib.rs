//! Projects Service Module
//!
//! A small page-flow service: list stored projects, show static pages and
//! accept new projects through an HTML form.

// Public exports
pub mod contract;
pub use contract::{error::ProjectsError, FieldErrors, NewProject, Project};

pub mod module;
pub use module::ProjectsServiceModule;

// Internal modules (hidden from public API)
#[doc(hidden)]
pub mod api;
#[doc(hidden)]
pub mod config;
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod infra;
