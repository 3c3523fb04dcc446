//! Form input and page context DTOs

use crate::contract::FieldErrors;
use serde::Serialize;
use std::collections::BTreeMap;

// ===== Form input =====

/// Fields submitted by the project form
///
/// Both fields are optional here so that an incomplete submission reaches
/// validation instead of being rejected while decoding.
#[derive(Debug, Clone, Default)]
pub struct ProjectForm {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl ProjectForm {
    /// Decode an `application/x-www-form-urlencoded` body
    ///
    /// Decoding is strict: a value that is not valid UTF-8 after
    /// percent-decoding, or a field given more than once, is reported as a
    /// field error instead of being altered. Unknown fields are ignored.
    pub fn from_urlencoded(body: &[u8]) -> (Self, FieldErrors) {
        let mut form = Self::default();
        let mut errors = FieldErrors::new();

        for pair in body.split(|b| *b == b'&').filter(|p| !p.is_empty()) {
            let (raw_key, raw_value) = match pair.iter().position(|b| *b == b'=') {
                Some(i) => (&pair[..i], &pair[i + 1..]),
                None => (pair, &pair[pair.len()..]),
            };

            let (slot, field, label) = match decode_component(raw_key).as_deref() {
                Ok("name") => (&mut form.name, "name", "Name"),
                Ok("description") => (&mut form.description, "description", "Description"),
                _ => continue,
            };

            if slot.is_some() || errors.get(field).is_some() {
                *slot = None;
                errors.add(field, format!("{} was submitted more than once.", label));
                continue;
            }

            match decode_component(raw_value) {
                Ok(value) => *slot = Some(value),
                Err(_) => errors.add(field, format!("{} is not valid UTF-8.", label)),
            }
        }

        (form, errors)
    }
}

/// Percent-decode one key or value, `+` meaning space
fn decode_component(raw: &[u8]) -> Result<String, std::string::FromUtf8Error> {
    let spaced: Vec<u8> = raw
        .iter()
        .map(|b| if *b == b'+' { b' ' } else { *b })
        .collect();
    String::from_utf8(urlencoding::decode_binary(&spaced).into_owned())
}

// ===== Page contexts =====

/// Project as shown on the listing page
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDto {
    pub id: i32,
    pub name: String,
    pub description: String,
}

/// Context for the listing page
#[derive(Debug, Clone, Serialize)]
pub struct IndexPage {
    pub title: String,
    pub all_projects: Vec<ProjectDto>,
}

/// Values echoed back into the form inputs
#[derive(Debug, Clone, Default, Serialize)]
pub struct FormValuesDto {
    pub name: String,
    pub description: String,
}

/// Context for the project form page
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePage {
    pub form: FormValuesDto,
    /// Field name -> message
    pub errors: BTreeMap<String, String>,
}

// Note: Conversion implementations live in mapper.rs
