//! Contract models for projects service
//!
//! These models are transport-agnostic and shared by the storage and REST layers.
//! NO serde derives - these are pure domain models.

use std::collections::BTreeMap;

/// A stored project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    /// Store-assigned identifier, never reused
    pub id: i32,
    /// Unique project name
    pub name: String,
    /// Free-text description
    pub description: String,
}

/// A validated project submission, ready to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
}

/// Per-field validation messages for a rejected submission
///
/// Keyed by form field name. Iteration order is stable (sorted by field).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, String>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`, replacing any earlier one
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl std::fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "{}", parts.join(", "))
    }
}
