use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: &'static str,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
