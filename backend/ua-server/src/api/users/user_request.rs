use serde::Deserialize;

/// Request body for creating or updating a user.
///
/// Missing fields deserialize as `None` and are rejected by validation.
#[derive(Debug, Default, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub email: Option<String>,
}
