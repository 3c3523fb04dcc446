//! Conversions between contract models and page DTOs

use super::dto::{FormValuesDto, ProjectDto, ProjectForm, UpdatePage};
use crate::contract::{FieldErrors, Project};

impl From<Project> for ProjectDto {
    fn from(model: Project) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
        }
    }
}

impl From<&ProjectForm> for FormValuesDto {
    fn from(form: &ProjectForm) -> Self {
        Self {
            name: form.name.clone().unwrap_or_default(),
            description: form.description.clone().unwrap_or_default(),
        }
    }
}

impl UpdatePage {
    /// Form page re-populated with a rejected submission
    pub fn rejected(form: &ProjectForm, errors: &FieldErrors) -> Self {
        Self {
            form: form.into(),
            errors: errors
                .iter()
                .map(|(field, message)| (field.to_string(), message.to_string()))
                .collect(),
        }
    }
}
