//! Approval workflow handlers, restricted to configured administrators

use crate::{AdminUser, ApiError, ApiResult, AppState, UserDto, UserListResponse, UserResponse};

use sg_core::UserApproval;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
};
use error_location::ErrorLocation;
use log::info;

/// GET /api/admin/pending-users
pub async fn pending_users(
    State(state): State<AppState>,
    AdminUser(_admin): AdminUser,
) -> Json<UserListResponse> {
    let users = state.store.get_pending_users().await;

    Json(UserListResponse {
        users: users.into_iter().map(UserDto::from).collect(),
    })
}

/// POST /api/admin/approve-user/{id}
///
/// Approve a user, recording the admin's email as approver
pub async fn approve_user(
    State(state): State<AppState>,
    AdminUser(admin): AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id: u64 = id.parse().map_err(|_| ApiError::Validation {
        message: format!("Invalid user id: {}", id),
        field: Some("id".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    let user = state
        .store
        .approve_user(user_id, UserApproval::approved_by(&admin.email))
        .await?
        .ok_or_else(|| ApiError::not_found(format!("User {} not found", user_id)))?;

    state.metrics.user_approved(&admin.email);
    info!("User {} approved by {}", user.email, admin.email);

    Ok(Json(UserResponse { user: user.into() }))
}
