use crate::{NewUser, User};

#[test]
fn test_user_apply_overwrites_fields_and_keeps_id() {
    let mut user = User {
        id: 7,
        name: "alice".to_string(),
        email: "a@x.com".to_string(),
    };

    user.apply(NewUser {
        name: "bob".to_string(),
        email: "b@x.com".to_string(),
    });

    assert_eq!(user.id, 7);
    assert_eq!(user.name, "bob");
    assert_eq!(user.email, "b@x.com");
}

#[test]
fn test_user_serializes_as_flat_object() {
    let user = User {
        id: 1,
        name: "alice".to_string(),
        email: "a@x.com".to_string(),
    };

    let json = serde_json::to_value(&user).unwrap();

    assert_eq!(
        json,
        serde_json::json!({"id": 1, "name": "alice", "email": "a@x.com"})
    );
}
