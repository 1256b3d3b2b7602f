pub mod api;
pub mod app_state;
pub mod bootstrap;
pub mod error;
pub mod health;
pub mod logger;
pub mod metrics;
pub mod routes;
pub mod shutdown_coordinator;
pub mod shutdown_guard;

#[cfg(test)]
mod tests;

pub use api::{
    admin::admin::{approve_user, pending_users},
    auth::{
        auth::{login, logout, me, request_access},
        login_request::LoginRequest,
        login_response::LoginResponse,
        request_access_request::RequestAccessRequest,
    },
    error::ApiError,
    error::Result as ApiResult,
    extractors::client_addr::ClientAddr,
    extractors::session_user::{AdminUser, ApprovedUser, SessionUser, session_token},
    logo::{
        logo::{resize_logo, serve_logo},
        resize_query::ResizeQuery,
    },
    message_response::MessageResponse,
    signature::signature::render_signature,
    user_dto::UserDto,
    user_list_response::UserListResponse,
    user_response::UserResponse,
};
pub use app_state::AppState;
pub use bootstrap::{BootstrapOutcome, approve_bootstrap_admin, spawn_admin_bootstrap};
pub use metrics::Metrics;
pub use shutdown_coordinator::ShutdownCoordinator;
pub use shutdown_guard::ShutdownGuard;

pub use crate::routes::build_router;
