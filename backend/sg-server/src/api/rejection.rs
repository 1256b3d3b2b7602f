//! Extractor rejections rendered through the JSON error body

use crate::ApiError;

use std::panic::Location;

use axum::extract::rejection::{BytesRejection, JsonRejection, QueryRejection};
use error_location::ErrorLocation;

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<QueryRejection> for ApiError {
    #[track_caller]
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<BytesRejection> for ApiError {
    #[track_caller]
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Validation {
            message: rejection.body_text(),
            field: Some("logo".to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
