use crate::ApiError;

use std::panic::Location;

use error_location::ErrorLocation;

/// Parse the `{id}` path segment.
///
/// Only unsigned decimal integers address a user. Anything else can never
/// match a row and is reported as not found rather than as a bad request.
pub fn parse_user_id(raw: &str) -> Result<i64, ApiError> {
    let id = if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse::<i64>().ok()
    } else {
        None
    };

    id.ok_or_else(|| ApiError::NotFound {
        message: format!("User {} not found", raw),
        location: ErrorLocation::from(Location::caller()),
    })
}
