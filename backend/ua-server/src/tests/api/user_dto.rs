use crate::{UserDto, UserRequest};

use ua_core::User;

use googletest::prelude::*;
use serde_json::json;

#[test]
fn test_user_dto_serializes_id_name_email() {
    let dto = UserDto::from(User {
        id: 3,
        name: "alice".into(),
        email: "a@x.com".into(),
    });

    let value = serde_json::to_value(&dto).unwrap();

    assert_that!(
        value,
        eq(&json!({"id": 3, "name": "alice", "email": "a@x.com"}))
    );
}

#[test]
fn test_user_request_missing_fields_are_none() {
    let req: UserRequest = serde_json::from_str(r#"{"name": "alice"}"#).unwrap();

    assert_that!(req.name.as_deref(), some(eq("alice")));
    assert_that!(req.email, none());
}

#[test]
fn test_user_request_ignores_unknown_fields() {
    let req: UserRequest =
        serde_json::from_str(r#"{"name": "a", "email": "b", "id": 9}"#).unwrap();

    assert_that!(req.email.as_deref(), some(eq("b")));
}
