pub mod user_dto;
pub mod user_id;
pub mod user_request;
#[allow(clippy::module_inception)]
pub mod users;
