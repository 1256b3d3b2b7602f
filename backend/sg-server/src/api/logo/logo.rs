//! Logo handlers
//!
//! Serves the hosted signature logo and scales uploaded replacements.

use crate::{ApiError, ApiResult, AppState, ApprovedUser, ResizeQuery};

use sg_core::{CoreError, MAX_RESIZE_WIDTH, is_image_content_type, resize_to_width};

use std::io::ErrorKind;
use std::panic::Location;

use axum::{
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
    http::{
        HeaderMap,
        header::{
            ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_SECURITY_POLICY, CONTENT_TYPE,
            X_CONTENT_TYPE_OPTIONS,
        },
    },
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use error_location::ErrorLocation;
use log::debug;

/// GET /api/logo/bwa-30th.png
///
/// Streams the configured logo file with long-lived cache headers
pub async fn serve_logo(State(state): State<AppState>) -> ApiResult<Response> {
    let path = state.assets.logo_path();

    let bytes = tokio::fs::read(&path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => ApiError::not_found(format!("Logo {} not found", path.display())),
        _ => ApiError::internal(format!("Failed to read logo {}: {}", path.display(), e)),
    })?;

    let headers = [
        (CONTENT_TYPE, state.assets.logo_content_type.clone()),
        (
            CACHE_CONTROL,
            format!("public, max-age={}", state.assets.cache_max_age_secs),
        ),
        (ACCESS_CONTROL_ALLOW_ORIGIN, "*".to_string()),
        (CONTENT_SECURITY_POLICY, "default-src 'self'".to_string()),
        (X_CONTENT_TYPE_OPTIONS, "nosniff".to_string()),
    ];

    Ok((headers, bytes).into_response())
}

/// POST /api/logo/resize?width=N
///
/// Scales the uploaded image to `width` keeping its aspect ratio and
/// returns it as PNG, with the new size in `X-Logo-Width`/`X-Logo-Height`.
pub async fn resize_logo(
    State(state): State<AppState>,
    ApprovedUser(user): ApprovedUser,
    query: Result<Query<ResizeQuery>, QueryRejection>,
    headers: HeaderMap,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<Response> {
    let Query(query) = query?;
    let body = body?;

    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    if !is_image_content_type(content_type) {
        return Err(CoreError::UnsupportedContentType {
            content_type: content_type.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
        .into());
    }

    if body.is_empty() {
        return Err(ApiError::Validation {
            message: "No image data received".to_string(),
            field: Some("logo".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let width = query.width.unwrap_or(state.signature.logo_target_width);
    if width == 0 || width > MAX_RESIZE_WIDTH {
        return Err(ApiError::Validation {
            message: format!("Width must be between 1 and {}", MAX_RESIZE_WIDTH),
            field: Some("width".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let resized = tokio::task::spawn_blocking(move || resize_to_width(&body, width))
        .await
        .map_err(|e| ApiError::internal(format!("Resize task failed: {}", e)))??;

    state.metrics.logo_resized();
    debug!(
        "Resized logo for {} to {}x{}",
        user.email, resized.width, resized.height
    );

    let headers = [
        (CONTENT_TYPE, "image/png".to_string()),
        (http::HeaderName::from_static("x-logo-width"), resized.width.to_string()),
        (http::HeaderName::from_static("x-logo-height"), resized.height.to_string()),
    ];

    Ok((headers, resized.bytes).into_response())
}
