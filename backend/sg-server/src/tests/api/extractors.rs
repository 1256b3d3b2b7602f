use crate::{ApiError, session_token};

use axum::http::{
    HeaderMap, HeaderValue,
    header::{AUTHORIZATION, COOKIE},
};

#[test]
fn test_bearer_header_wins_over_cookie() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer header-token"));
    headers.insert(COOKIE, HeaderValue::from_static("sg_session=cookie-token"));

    assert_eq!(session_token(&headers, "sg_session").unwrap(), "header-token");
}

#[test]
fn test_cookie_used_without_authorization_header() {
    let mut headers = HeaderMap::new();
    headers.insert(COOKIE, HeaderValue::from_static("theme=dark; sg_session=cookie-token"));

    assert_eq!(session_token(&headers, "sg_session").unwrap(), "cookie-token");
}

#[test]
fn test_cookie_found_in_second_cookie_header() {
    let mut headers = HeaderMap::new();
    headers.append(COOKIE, HeaderValue::from_static("theme=dark"));
    headers.append(COOKIE, HeaderValue::from_static("sg_session=second"));

    assert_eq!(session_token(&headers, "sg_session").unwrap(), "second");
}

#[test]
fn test_no_credentials_is_unauthorized() {
    let headers = HeaderMap::new();

    assert!(matches!(
        session_token(&headers, "sg_session"),
        Err(ApiError::Unauthorized { .. })
    ));
}

#[test]
fn test_basic_auth_scheme_is_unauthorized() {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic dXNlcg=="));
    headers.insert(COOKIE, HeaderValue::from_static("sg_session=cookie-token"));

    assert!(matches!(
        session_token(&headers, "sg_session"),
        Err(ApiError::Unauthorized { .. })
    ));
}
