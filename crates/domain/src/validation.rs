use crate::error::{DomainError, Result};

/// Trim a required text field, rejecting blank input.
pub fn required_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(format!("{field} must not be empty")));
    }
    Ok(trimmed.to_string())
}

/// Trim an optional text field. Blank input collapses to `None`.
pub fn optional_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

pub fn email(value: &str) -> Result<String> {
    let trimmed = value.trim();
    let valid = match trimmed.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    };
    if !valid {
        return Err(DomainError::validation(format!(
            "email '{trimmed}' is not a valid address"
        )));
    }
    Ok(trimmed.to_string())
}

pub fn non_negative(field: &str, value: i32) -> Result<i32> {
    if value < 0 {
        return Err(DomainError::validation(format!(
            "{field} must be zero or greater, got {value}"
        )));
    }
    Ok(value)
}
