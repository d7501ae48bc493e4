//! Validated user input shared by create and update.

use crate::{CoreError, ErrorLocation, FieldLimits, Result as CoreResult};

use std::panic::Location;

/// Name and email that passed presence and length checks.
///
/// Values are kept exactly as sent; surrounding whitespace only counts
/// against the blank check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
}

impl NewUser {
    /// Validate raw request fields.
    ///
    /// Both fields are required. A missing or whitespace-only value is
    /// rejected with a message naming the field. Name is checked first.
    #[track_caller]
    pub fn parse(
        name: Option<&str>,
        email: Option<&str>,
        limits: &FieldLimits,
    ) -> CoreResult<Self> {
        let name = required("name", "Name", name, limits.max_name_length)?;
        let email = required("email", "Email", email, limits.max_email_length)?;

        Ok(Self { name, email })
    }
}

#[track_caller]
fn required(
    field: &'static str,
    label: &str,
    value: Option<&str>,
    max_length: usize,
) -> CoreResult<String> {
    let value = value.unwrap_or_default();

    if value.trim().is_empty() {
        return Err(CoreError::Validation {
            message: format!("{} cannot be blank", label),
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let length = value.chars().count();
    if length > max_length {
        return Err(CoreError::Validation {
            message: format!(
                "{} must be at most {} characters, got {}",
                label, max_length, length
            ),
            field,
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(value.to_string())
}
