use crate::{AccessRequestForm, CoreError, LoginForm, has_domain_suffix, is_valid_email};

use googletest::prelude::*;

#[test]
fn test_is_valid_email_accepts_common_shapes() {
    assert!(is_valid_email("a@socialmarketing.com"));
    assert!(is_valid_email("first.last+tag@mail.socialmarketing.com"));
    assert!(is_valid_email("x@sub-domain.example.org"));
}

#[test]
fn test_is_valid_email_rejects_malformed() {
    for email in [
        "",
        "plain",
        "@socialmarketing.com",
        "a@",
        "a@com",
        "a b@socialmarketing.com",
        "a@@socialmarketing.com",
        ".a@socialmarketing.com",
        "a..b@socialmarketing.com",
        "a@-bad.com",
        "a@socialmarketing.c",
    ] {
        assert!(!is_valid_email(email), "expected {email:?} to be rejected");
    }
}

#[test]
fn test_has_domain_suffix_is_case_insensitive() {
    assert!(has_domain_suffix("a@SocialMarketing.COM", "socialmarketing.com"));
    assert!(has_domain_suffix("a@socialmarketing.com", "@socialmarketing.com"));
    assert!(!has_domain_suffix("a@notsocialmarketing.com", "socialmarketing.com"));
    assert!(!has_domain_suffix("a@socialmarketing.com.evil.io", "socialmarketing.com"));
}

#[test]
fn given_valid_request_when_validated_then_returns_trimmed_new_user() {
    let form = AccessRequestForm::new("  a@socialmarketing.com ", "  Ada Lovelace ");

    let new_user = form.validate("socialmarketing.com").unwrap();

    assert_eq!(new_user.email, "a@socialmarketing.com");
    assert_eq!(new_user.name, "Ada Lovelace");
}

#[test]
fn given_foreign_domain_when_validated_then_email_field_error() {
    let form = AccessRequestForm::new("a@gmail.com", "A");

    let err = form.validate("socialmarketing.com").unwrap_err();

    assert_eq!(err.field(), Some("email"));
    assert_that!(
        err.user_message(),
        contains_substring("@socialmarketing.com email addresses")
    );
}

#[test]
fn given_blank_name_when_validated_then_name_field_error() {
    let form = AccessRequestForm::new("a@socialmarketing.com", "   ");

    let err = form.validate("socialmarketing.com").unwrap_err();

    assert_eq!(err.field(), Some("name"));
    assert_eq!(err.user_message(), "Please enter your full name");
}

#[test]
fn given_malformed_email_when_validated_then_valid_email_message() {
    let form = AccessRequestForm::new("not-an-email", "A");

    let err = form.validate("socialmarketing.com").unwrap_err();

    assert!(matches!(err, CoreError::Validation { .. }));
    assert_eq!(err.user_message(), "Please enter a valid email address");
}

#[test]
fn test_login_form_validation() {
    let valid = LoginForm::new(" a@socialmarketing.com ");
    let invalid = LoginForm::new("nope");

    assert_eq!(valid.validate().unwrap(), "a@socialmarketing.com");
    assert_that!(invalid.validate(), err(anything()));
}
