//! User entity - the single resource exposed by the API.

use crate::NewUser;

use serde::Serialize;

/// A stored user.
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// `name` and `email` are each unique across all users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl User {
    /// Overwrite name and email with already-validated input
    pub fn apply(&mut self, input: NewUser) {
        self.name = input.name;
        self.email = input.email;
    }
}
