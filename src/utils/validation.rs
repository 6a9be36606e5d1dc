use crate::utils::error::{LibraryError, Result};
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::Hash;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| LibraryError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(LibraryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Fails on the first id that appears twice.
pub fn validate_unique_ids<T, I>(field_name: &str, ids: I) -> Result<()>
where
    T: Eq + Hash + Display,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    for id in ids {
        let shown = id.to_string();
        if !seen.insert(id) {
            return Err(LibraryError::ConfigValidationError {
                field: field_name.to_string(),
                message: format!("id {} is used more than once", shown),
            });
        }
    }
    Ok(())
}
