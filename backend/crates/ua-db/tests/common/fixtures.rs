use ua_core::NewUser;

/// Creates validated input for a user named `name` at `name@example.com`
pub fn new_user(name: &str) -> NewUser {
    NewUser {
        name: name.to_string(),
        email: format!("{}@example.com", name),
    }
}
