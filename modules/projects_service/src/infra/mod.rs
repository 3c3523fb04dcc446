//! Infrastructure layer - storage and template rendering

pub mod storage;
pub mod templates;
