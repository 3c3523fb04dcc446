//! API layer - HTTP surface and the page rendering port

pub mod render;
pub mod rest;
