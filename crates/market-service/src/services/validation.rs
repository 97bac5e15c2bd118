//! Required-field checks run before any store access
//!
//! A field counts as present when it is non-empty after trimming. When any
//! field is missing the error names the whole combination the operation
//! needs, e.g. "Email, modelId, and tokenId are required".

use super::error::{ServiceError, ServiceResult};

/// Fail with a validation error unless every `(label, value)` is present
pub fn require(fields: &[(&str, &str)]) -> ServiceResult<()> {
    if fields.iter().all(|(_, value)| is_present(value)) {
        return Ok(());
    }
    let labels: Vec<&str> = fields.iter().map(|(label, _)| *label).collect();
    Err(ServiceError::validation(required_message(&labels)))
}

/// "A is required", "A and B are required", "A, B, and C are required"
pub fn required_message(labels: &[&str]) -> String {
    match labels {
        [] => "Required fields are missing".to_string(),
        [only] => format!("{only} is required"),
        [first, second] => format!("{first} and {second} are required"),
        [init @ .., last] => format!("{}, and {last} are required", init.join(", ")),
    }
}

#[inline]
pub fn is_present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Trim an optional input, treating blank as absent
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(ToString::to_string)
}
