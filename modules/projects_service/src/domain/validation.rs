//! Validation of submitted project form fields

use crate::contract::{FieldErrors, NewProject};

/// Maximum project name length, in characters
pub const MAX_NAME_LEN: usize = 255;

/// Validate raw form fields into a [`NewProject`]
///
/// Every failing field is reported at once. Accepted values are returned
/// unchanged; blank checks ignore surrounding whitespace but nothing is trimmed.
pub fn validate_new_project(
    name: Option<&str>,
    description: Option<&str>,
) -> Result<NewProject, FieldErrors> {
    let mut errors = FieldErrors::new();

    match name {
        None => errors.add("name", "Name is required."),
        Some(n) if n.trim().is_empty() => errors.add("name", "Name is required."),
        Some(n) if n.chars().count() > MAX_NAME_LEN => errors.add(
            "name",
            format!("Name must be at most {} characters.", MAX_NAME_LEN),
        ),
        Some(_) => {}
    }

    match description {
        Some(d) if !d.trim().is_empty() => {}
        _ => errors.add("description", "Description is required."),
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewProject {
        name: name.unwrap_or_default().to_string(),
        description: description.unwrap_or_default().to_string(),
    })
}
