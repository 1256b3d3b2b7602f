#![allow(dead_code)]

//! Test infrastructure for sg-server API tests

use sg_config::Config;
use sg_core::{NewUser, User, UserApproval};
use sg_server::{AppState, ShutdownCoordinator};
use sg_store::UserStore;

use std::io::Cursor;
use std::net::SocketAddr;

use axum::{
    Router,
    body::Body,
    extract::ConnectInfo,
    http::{HeaderMap, Request, StatusCode},
};
use http_body_util::BodyExt;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use metrics_exporter_prometheus::PrometheusBuilder;
use tempfile::TempDir;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@socialmarketing.com";
pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Config pointing the assets at `assets`, with bootstrap off
pub fn test_config(assets: &TempDir) -> Config {
    let mut config = Config::default();
    config.auth.jwt_secret = Some(TEST_SECRET.to_string());
    config.assets.dir = assets.path().to_string_lossy().into_owned();
    config.bootstrap.enabled = false;
    config
}

/// Create AppState for testing from a config
pub fn create_test_app_state_with(config: &Config) -> AppState {
    let handle = PrometheusBuilder::new().build_recorder().handle();
    AppState::from_config(config, UserStore::new(), handle, ShutdownCoordinator::new())
}

/// Create AppState for testing; keep the TempDir alive for the assets
pub fn create_test_app_state() -> (AppState, TempDir) {
    let assets = TempDir::new().unwrap();
    let state = create_test_app_state_with(&test_config(&assets));
    (state, assets)
}

/// Insert a user directly into the store, optionally approved
pub async fn create_test_user(state: &AppState, email: &str, approved: bool) -> User {
    let user = state
        .store
        .create_user(NewUser::new(email, "Test User"))
        .await
        .unwrap();

    if !approved {
        return user;
    }

    state
        .store
        .approve_user(user.id, UserApproval::approved_by("test"))
        .await
        .unwrap()
        .unwrap()
}

/// `Authorization` header value for a session belonging to `user`
pub fn bearer_for(state: &AppState, user: &User) -> String {
    let session = state.session_issuer.issue(user.id, &user.email).unwrap();
    format!("Bearer {}", session.token)
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Attach the peer address axum records for connections it accepts
pub fn from_client(mut request: Request<Body>, addr: &str) -> Request<Body> {
    let addr: SocketAddr = addr.parse().unwrap();
    request.extensions_mut().insert(ConnectInfo(addr));
    request
}

pub fn authed_json_request(
    method: &str,
    uri: &str,
    auth: &str,
    body: serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .header("authorization", auth)
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn authed_request(method: &str, uri: &str, auth: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("authorization", auth)
        .body(Body::empty())
        .unwrap()
}

/// Send a request and return status, headers and the raw body
pub async fn send_raw(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, headers, body.to_vec())
}

/// Send a request and parse the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, serde_json::Value) {
    let (status, headers, body) = send_raw(app, request).await;
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, headers, json)
}

/// Encode a solid-colour PNG of the given size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let image = RgbaImage::from_pixel(width, height, Rgba([10, 120, 200, 255]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image)
        .write_to(&mut out, ImageFormat::Png)
        .unwrap();
    out.into_inner()
}
