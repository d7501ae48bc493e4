use crate::{ConfigError, ConfigErrorResult};

use ua_core::FieldLimits;

use serde::Deserialize;

pub const MIN_FIELD_LENGTH: usize = 1;
pub const MAX_FIELD_LENGTH: usize = 1000;
pub const DEFAULT_MAX_FIELD_LENGTH: usize = 80;

/// Length limits applied to user input before it reaches the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    pub max_name_length: usize,
    pub max_email_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_name_length: DEFAULT_MAX_FIELD_LENGTH,
            max_email_length: DEFAULT_MAX_FIELD_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        Self::check_range("validation.max_name_length", self.max_name_length)?;
        Self::check_range("validation.max_email_length", self.max_email_length)?;

        Ok(())
    }

    pub fn field_limits(&self) -> FieldLimits {
        FieldLimits {
            max_name_length: self.max_name_length,
            max_email_length: self.max_email_length,
        }
    }

    #[track_caller]
    fn check_range(name: &str, value: usize) -> ConfigErrorResult<()> {
        if !(MIN_FIELD_LENGTH..=MAX_FIELD_LENGTH).contains(&value) {
            return Err(ConfigError::invalid(
                "validation",
                format!(
                    "{} must be {}-{}, got {}",
                    name, MIN_FIELD_LENGTH, MAX_FIELD_LENGTH, value
                ),
            ));
        }

        Ok(())
    }
}
