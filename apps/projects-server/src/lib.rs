//! Projects Server
//!
//! Process-level concerns for the projects service: layered configuration,
//! logging setup, database connection and the HTTP server loop.

pub mod config;
pub mod logging;
pub mod server;
