use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Unsupported content type: {content_type} {location}")]
    UnsupportedContentType {
        content_type: String,
        location: ErrorLocation,
    },

    #[error("Image processing failed: {message} {location}")]
    Image {
        message: String,
        location: ErrorLocation,
    },

    #[error("Signature is still being generated {location}")]
    SignatureNotReady { location: ErrorLocation },
}

impl CoreError {
    /// Field name attached to a validation error, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Validation { field, .. } => field.as_deref(),
            _ => None,
        }
    }

    /// Message without the location suffix, suitable for end users
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => message.clone(),
            Self::UnsupportedContentType { .. } => {
                "Please upload an image file (PNG, JPG, SVG, etc.)".to_string()
            }
            Self::Image { message, .. } => message.clone(),
            Self::SignatureNotReady { .. } => "Signature is still being generated...".to_string(),
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
