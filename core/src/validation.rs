//! Client-side input checks run on submit.
//!
//! Nothing is validated while the user types or picks a file.

use crate::error::ValidationError;

/// Loose email check: non-empty and contains `@`.
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.contains('@')
}

/// Validate a submission. The file is checked before the email.
pub fn validate<F>(file: Option<&F>, email: &str) -> Result<(), ValidationError> {
    if file.is_none() {
        return Err(ValidationError::MissingFile);
    }

    if !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}
