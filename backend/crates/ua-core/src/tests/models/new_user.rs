use crate::{CoreError, FieldLimits, NewUser};

use googletest::prelude::*;

#[test]
fn given_name_and_email_when_parse_then_ok() {
    let result = NewUser::parse(Some("alice"), Some("a@x.com"), &FieldLimits::default());

    assert_that!(result, ok(anything()));
    let user = result.unwrap();
    assert_that!(user.name, eq("alice"));
    assert_that!(user.email, eq("a@x.com"));
}

#[test]
fn given_padded_values_when_parse_then_kept_as_sent() {
    let user = NewUser::parse(Some(" alice "), Some("a@x.com "), &FieldLimits::default())
        .unwrap();

    assert_that!(user.name, eq(" alice "));
    assert_that!(user.email, eq("a@x.com "));
}

#[test]
fn given_padding_when_parse_then_counted_against_limit() {
    let limits = FieldLimits {
        max_name_length: 5,
        max_email_length: 80,
    };

    let result = NewUser::parse(Some(" alice "), Some("a@x.com"), &limits);

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "name"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_missing_email_when_parse_then_email_field_error() {
    let result = NewUser::parse(Some("alice"), None, &FieldLimits::default());

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_eq!(field, "email");
            assert_that!(message, eq("Email cannot be blank"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_blank_name_when_parse_then_name_field_error() {
    let result = NewUser::parse(Some("   "), Some("a@x.com"), &FieldLimits::default());

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_eq!(field, "name");
            assert_that!(message, eq("Name cannot be blank"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_both_missing_when_parse_then_name_reported_first() {
    let result = NewUser::parse(None, None, &FieldLimits::default());

    match result {
        Err(CoreError::Validation { field, .. }) => assert_eq!(field, "name"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_name_over_limit_when_parse_then_error() {
    let limits = FieldLimits {
        max_name_length: 5,
        max_email_length: 80,
    };

    let result = NewUser::parse(Some("abcdef"), Some("a@x.com"), &limits);

    match result {
        Err(CoreError::Validation { message, field, .. }) => {
            assert_eq!(field, "name");
            assert_that!(message, contains_substring("at most 5"));
        }
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn given_name_at_limit_counted_in_chars_when_parse_then_ok() {
    let limits = FieldLimits {
        max_name_length: 3,
        max_email_length: 80,
    };

    let result = NewUser::parse(Some("éèà"), Some("a@x.com"), &limits);

    assert_that!(result, ok(anything()));
}
