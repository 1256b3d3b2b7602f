//! Axum extractors resolving the caller's session to a stored user
//!
//! The token is read from `Authorization: Bearer` when that header is
//! present, otherwise from the session cookie.

use crate::{ApiError, ApiResult, AppState};

use sg_auth::{bearer_token, cookie_value};
use sg_core::User;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{
        HeaderMap,
        header::{AUTHORIZATION, COOKIE},
        request::Parts,
    },
};

/// Any caller holding a valid session for an existing user
pub struct SessionUser(pub User);

/// A session user whose access request has been approved
pub struct ApprovedUser(pub User);

/// An approved user listed in `auth.admin_emails`
pub struct AdminUser(pub User);

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move { resolve_session_user(&parts.headers, state).await.map(SessionUser) }
    }
}

impl FromRequestParts<AppState> for ApprovedUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let user = resolve_session_user(&parts.headers, state).await?;
            require_approved(&user)?;
            Ok(ApprovedUser(user))
        }
    }
}

impl FromRequestParts<AppState> for AdminUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let user = resolve_session_user(&parts.headers, state).await?;
            require_approved(&user)?;

            if !state.auth.is_admin(&user.email) {
                log::warn!("User {} attempted an admin operation", user.email);
                return Err(ApiError::forbidden("Administrator access required"));
            }

            Ok(AdminUser(user))
        }
    }
}

/// Find the raw session token in the request headers
pub fn session_token<'a>(headers: &'a HeaderMap, cookie_name: &str) -> ApiResult<&'a str> {
    if let Some(value) = headers.get(AUTHORIZATION) {
        let value = value
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid session"))?;
        return Ok(bearer_token(value)?);
    }

    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find_map(|cookie| cookie_value(cookie, cookie_name))
        .ok_or_else(|| ApiError::unauthorized("Not authenticated"))
}

async fn resolve_session_user(headers: &HeaderMap, state: &AppState) -> ApiResult<User> {
    let token = session_token(headers, &state.auth.cookie_name)?;
    let claims = state.jwt_validator.validate(token)?;
    let user_id = claims.user_id()?;

    let user = state
        .store
        .get_user(user_id)
        .await
        .ok_or_else(|| ApiError::unauthorized("Session user no longer exists"))?;

    if !user.email.eq_ignore_ascii_case(&claims.email) {
        return Err(ApiError::unauthorized("Invalid session"));
    }

    Ok(user)
}

fn require_approved(user: &User) -> ApiResult<()> {
    if user.is_approved {
        Ok(())
    } else {
        Err(ApiError::forbidden("Your access request is pending approval"))
    }
}
