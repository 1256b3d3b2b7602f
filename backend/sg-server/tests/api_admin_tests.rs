//! Integration tests for the approval workflow
mod common;

use crate::common::{
    ADMIN_EMAIL, authed_request, bearer_for, create_test_app_state, create_test_user,
    json_request, send,
};

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::json;

use sg_server::routes::build_router;

#[tokio::test]
async fn test_pending_users_requires_session() {
    let (state, _assets) = create_test_app_state();

    let request = Request::builder()
        .method("GET")
        .uri("/api/admin/pending-users")
        .body(Body::empty())
        .unwrap();
    let (status, _, _) = send(build_router(state), request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_pending_users_forbidden_for_non_admin() {
    let (state, _assets) = create_test_app_state();
    let user = create_test_user(&state, "jane@socialmarketing.com", true).await;
    let auth = bearer_for(&state, &user);

    let request = authed_request("GET", "/api/admin/pending-users", &auth);
    let (status, _, json) = send(build_router(state), request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_pending_users_forbidden_for_unapproved_admin_email() {
    let (state, _assets) = create_test_app_state();
    let admin = create_test_user(&state, ADMIN_EMAIL, false).await;
    let auth = bearer_for(&state, &admin);

    let request = authed_request("GET", "/api/admin/pending-users", &auth);
    let (status, _, _) = send(build_router(state), request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_pending_users_lists_only_pending() {
    let (state, _assets) = create_test_app_state();
    let admin = create_test_user(&state, ADMIN_EMAIL, true).await;
    create_test_user(&state, "a@socialmarketing.com", false).await;
    create_test_user(&state, "b@socialmarketing.com", true).await;
    create_test_user(&state, "c@socialmarketing.com", false).await;
    let auth = bearer_for(&state, &admin);

    let request = authed_request("GET", "/api/admin/pending-users", &auth);
    let (status, _, json) = send(build_router(state), request).await;

    assert_eq!(status, StatusCode::OK);
    let users = json["users"].as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert_eq!(users[0]["email"], "a@socialmarketing.com");
    assert_eq!(users[1]["email"], "c@socialmarketing.com");
}

#[tokio::test]
async fn test_request_then_approve_empties_pending_list() {
    let (state, _assets) = create_test_app_state();

    // Request access over HTTP: first record gets id 1
    let (status, _, json) = send(
        build_router(state.clone()),
        json_request(
            "POST",
            "/api/auth/request-access",
            json!({"email": "a@socialmarketing.com", "name": "A"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["user"]["id"], 1);

    let admin = create_test_user(&state, ADMIN_EMAIL, true).await;
    let auth = bearer_for(&state, &admin);

    let (status, _, json) = send(
        build_router(state.clone()),
        authed_request("POST", "/api/admin/approve-user/1", &auth),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["user"]["id"], 1);
    assert_eq!(json["user"]["isApproved"], true);
    assert_eq!(json["user"]["approvedBy"], ADMIN_EMAIL);

    let (status, _, json) = send(
        build_router(state.clone()),
        authed_request("GET", "/api/admin/pending-users", &auth),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["users"].as_array().unwrap().len(), 0);

    // The approved user can now log in
    let (status, _, _) = send(
        build_router(state),
        json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "a@socialmarketing.com"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_approve_unknown_user_is_not_found() {
    let (state, _assets) = create_test_app_state();
    let admin = create_test_user(&state, ADMIN_EMAIL, true).await;
    let auth = bearer_for(&state, &admin);

    let (status, _, json) = send(
        build_router(state.clone()),
        authed_request("POST", "/api/admin/approve-user/42", &auth),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(state.store.user_count().await, 1);
}

#[tokio::test]
async fn test_approve_non_numeric_id_is_validation_error() {
    let (state, _assets) = create_test_app_state();
    let admin = create_test_user(&state, ADMIN_EMAIL, true).await;
    let auth = bearer_for(&state, &admin);

    let (status, _, json) = send(
        build_router(state),
        authed_request("POST", "/api/admin/approve-user/abc", &auth),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "id");
}
