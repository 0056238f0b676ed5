//! Field validation helpers
//!
//! Stateless validators for table payload fields. No store access.
//! The legacy API treated every falsy value as "missing"; here the
//! distinction is explicit: a field is missing, invalid, or valid.

use shared::{AppError, AppResult};

/// Outcome of checking a single payload field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCheck<T> {
    /// Field absent from the payload (empty strings count as absent)
    Missing,
    /// Field present but carrying an unusable value
    Invalid(T),
    Valid(T),
}

/// Check a table name: absent/empty is missing, length 1 is invalid
pub fn check_table_name(value: Option<&str>) -> FieldCheck<&str> {
    match value {
        None => FieldCheck::Missing,
        Some("") => FieldCheck::Missing,
        Some(name) if name.chars().count() == 1 => FieldCheck::Invalid(name),
        Some(name) => FieldCheck::Valid(name),
    }
}

/// Check a capacity: absent is missing, zero or negative is invalid
pub fn check_capacity(value: Option<i64>) -> FieldCheck<i64> {
    match value {
        None => FieldCheck::Missing,
        Some(capacity) if capacity <= 0 => FieldCheck::Invalid(capacity),
        Some(capacity) => FieldCheck::Valid(capacity),
    }
}

/// Validate a table name, returning it on success
pub fn validate_table_name(value: Option<&str>) -> AppResult<&str> {
    match check_table_name(value) {
        FieldCheck::Valid(name) => Ok(name),
        FieldCheck::Invalid(name) => Err(AppError::invalid_request(format!(
            "{} is not a valid table_name",
            name
        ))),
        FieldCheck::Missing => Err(AppError::invalid_request(
            "data must include a table_name.",
        )),
    }
}

/// Validate a capacity, returning it as an unsigned seat count
pub fn validate_capacity_field(value: Option<i64>) -> AppResult<u32> {
    match check_capacity(value) {
        FieldCheck::Valid(capacity) => u32::try_from(capacity).map_err(|_| {
            AppError::invalid_request(format!("{} is not a valid capacity", capacity))
        }),
        FieldCheck::Invalid(capacity) => Err(AppError::invalid_request(format!(
            "{} is not a valid capacity",
            capacity
        ))),
        FieldCheck::Missing => Err(AppError::invalid_request(
            "data must include a capacity value",
        )),
    }
}
