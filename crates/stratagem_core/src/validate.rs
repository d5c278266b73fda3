//! Shared constructor checks.

use stratagem_error::ValidationError;

/// Rejects the empty string.
#[track_caller]
pub(crate) fn non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(format!("{} cannot be empty", field)));
    }
    Ok(())
}

/// Rejects NaN and infinities.
#[track_caller]
pub(crate) fn finite(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::new(format!(
            "{} must be a finite number, got {}",
            field, value
        )));
    }
    Ok(())
}
