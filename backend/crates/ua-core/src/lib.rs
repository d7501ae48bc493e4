pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::field_limits::FieldLimits;
pub use models::new_user::NewUser;
pub use models::user::User;
