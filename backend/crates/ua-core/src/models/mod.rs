pub mod field_limits;
pub mod new_user;
pub mod user;
