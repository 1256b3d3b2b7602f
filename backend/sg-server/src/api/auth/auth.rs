//! Session and access-request handlers

use crate::{
    ApiError, ApiResult, AppState, ClientAddr, LoginRequest, LoginResponse, MessageResponse,
    RequestAccessRequest, SessionUser, UserResponse,
};

use sg_auth::{clear_session_cookie, session_cookie};
use sg_core::{AccessRequestForm, LoginForm};

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header::SET_COOKIE},
    response::{IntoResponse, Response},
};
use log::{info, warn};

/// GET /api/auth/me
///
/// The user behind the current session
pub async fn me(SessionUser(user): SessionUser) -> Json<UserResponse> {
    Json(UserResponse { user: user.into() })
}

/// POST /api/auth/login
///
/// Email-only login. Unknown addresses get 401, pending ones 403.
pub async fn login(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Response> {
    state.rate_limiter.check(client)?;
    let Json(request) = payload?;

    let form = LoginForm::new(request.email);
    let email = form.validate()?;

    let user = state
        .store
        .get_user_by_email(email)
        .await
        .ok_or_else(|| {
            warn!("Login attempt for unknown email {}", email);
            ApiError::unauthorized("No account found for this email. Please request access first.")
        })?;

    if !user.is_approved {
        warn!("Login attempt by pending user {}", user.email);
        return Err(ApiError::forbidden(
            "Your access request is pending approval",
        ));
    }

    let session = state.session_issuer.issue(user.id, &user.email)?;
    let cookie = session_cookie(
        &state.auth.cookie_name,
        &session.token,
        session.max_age_secs,
        state.auth.cookie_secure,
    );

    state.metrics.login();
    info!("User {} logged in", user.email);

    Ok((
        [(SET_COOKIE, cookie)],
        Json(LoginResponse {
            user: user.into(),
            token: session.token,
        }),
    )
        .into_response())
}

/// POST /api/auth/logout
///
/// Always succeeds; the browser drops the session cookie.
pub async fn logout(State(state): State<AppState>) -> Response {
    let cookie = clear_session_cookie(&state.auth.cookie_name, state.auth.cookie_secure);
    info!("Session cleared");

    (
        [(SET_COOKIE, cookie)],
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
        .into_response()
}

/// POST /api/auth/request-access
///
/// Create a pending user for an address in the allowed domain
pub async fn request_access(
    State(state): State<AppState>,
    ClientAddr(client): ClientAddr,
    payload: Result<Json<RequestAccessRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    state.rate_limiter.check(client)?;
    let Json(request) = payload?;

    let new_user = AccessRequestForm::new(request.email, request.name)
        .validate(&state.auth.allowed_email_domain)?;

    let user = state.store.create_user(new_user).await?;

    state.metrics.access_requested();
    info!("Access requested by {} (id {})", user.email, user.id);

    Ok((StatusCode::CREATED, Json(UserResponse { user: user.into() })))
}
