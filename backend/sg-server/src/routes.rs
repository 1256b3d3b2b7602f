use crate::{
    AppState, approve_user, health, login, logout, me, pending_users, render_signature,
    request_access, resize_logo, serve_logo,
};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.signature.max_upload_bytes;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        .route("/metrics", get(health::metrics_export))
        // Session endpoints
        .route("/api/auth/me", get(me))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .route("/api/auth/request-access", post(request_access))
        // Admin endpoints
        .route("/api/admin/pending-users", get(pending_users))
        .route("/api/admin/approve-user/{id}", post(approve_user))
        // Signature endpoints
        .route("/api/logo/bwa-30th.png", get(serve_logo))
        .route(
            "/api/logo/resize",
            post(resize_logo).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/signature/render", post(render_signature))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
