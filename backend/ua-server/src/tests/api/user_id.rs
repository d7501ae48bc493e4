use crate::{ApiError, parse_user_id};

use googletest::prelude::*;

#[test]
fn test_parse_user_id_accepts_digits() {
    assert_that!(parse_user_id("42").unwrap(), eq(42));
    assert_that!(parse_user_id("007").unwrap(), eq(7));
}

#[test]
fn test_parse_user_id_rejects_non_integers_as_not_found() {
    for raw in ["abc", "-1", "+1", "1.5", "", " 1"] {
        assert!(
            matches!(parse_user_id(raw), Err(ApiError::NotFound { .. })),
            "{raw:?} should be not found"
        );
    }
}

#[test]
fn test_parse_user_id_overflow_is_not_found() {
    assert!(matches!(
        parse_user_id("99999999999999999999"),
        Err(ApiError::NotFound { .. })
    ));
}
