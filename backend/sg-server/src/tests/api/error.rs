use crate::ApiError;

use sg_auth::AuthError;
use sg_core::CoreError;
use sg_store::StoreError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_json_body() {
    let (status, json) = body_json(ApiError::not_found("User 9 not found")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "User 9 not found");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Please enter your full name".into(),
        field: Some("name".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "name");
}

#[tokio::test]
async fn test_status_codes_for_session_errors() {
    let (unauthorized, json) = body_json(ApiError::unauthorized("Not authenticated")).await;
    assert_eq!(unauthorized, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");

    let (forbidden, json) = body_json(ApiError::forbidden("pending")).await;
    assert_eq!(forbidden, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let (status, json) = body_json(ApiError::internal("boom")).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_duplicate_email_converts_to_conflict() {
    let error: ApiError = StoreError::DuplicateEmail {
        email: "a@socialmarketing.com".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(error, ApiError::Conflict { .. }));
    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[test]
fn test_rate_limit_converts_to_429() {
    let error: ApiError = AuthError::RateLimitExceeded {
        limit: 30,
        window_secs: 60,
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(error.code(), "RATE_LIMITED");
}

#[test]
fn test_expired_token_converts_to_unauthorized() {
    let error: ApiError = AuthError::TokenExpired {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(error, ApiError::Unauthorized { ref message, .. } if message == "Session expired"));
}

#[test]
fn test_malformed_session_errors_convert_to_invalid_session() {
    let scheme: ApiError = AuthError::InvalidScheme {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    let claim: ApiError = AuthError::InvalidClaim {
        claim: "sub".to_string(),
        message: "empty".to_string(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    for error in [scheme, claim] {
        assert_eq!(error.status(), StatusCode::UNAUTHORIZED);
        assert!(matches!(error, ApiError::Unauthorized { ref message, .. } if message == "Invalid session"));
    }
}

#[test]
fn test_unsupported_content_type_keeps_user_message() {
    let error: ApiError = CoreError::UnsupportedContentType {
        content_type: "text/plain".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Please upload an image file (PNG, JPG, SVG, etc.)");
            assert_eq!(field.as_deref(), Some("logo"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn test_signature_not_ready_converts_to_bad_request() {
    let error: ApiError = CoreError::SignatureNotReady {
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.code(), "BAD_REQUEST");
}
