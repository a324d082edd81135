//! Validation Utilities

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError.
///
/// The summary message names the first failing field; `errors` carries all of them.
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let mut field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    // Field order from the map is arbitrary
    field_errors.sort_by(|a, b| a.field.cmp(&b.field));

    let message = field_errors
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation {
        message,
        errors: field_errors,
    }
}

/// Reject strings that are empty, whitespace only, or contain NUL.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("blank");
        error.message = Some(Cow::Borrowed("must not be blank"));
        return Err(error);
    }
    no_nul(value)
}

/// Reject strings containing a NUL character; PostgreSQL text cannot store it.
pub fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        let mut error = ValidationError::new("nul");
        error.message = Some(Cow::Borrowed("must not contain NUL characters"));
        return Err(error);
    }
    Ok(())
}

/// Parse a numeric identifier taken from a URL path segment.
///
/// Only plain ASCII digits are accepted, so `+1` or `01x` never alias an id.
pub fn parse_id(raw: &str, entity: &str) -> Result<i64, AppError> {
    let invalid = || AppError::BadRequest(format!("Invalid {} ID", entity));

    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    raw.parse::<i64>().map_err(|_| invalid())
}
