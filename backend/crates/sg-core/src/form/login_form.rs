use crate::{CoreError, Result as CoreResult, is_valid_email};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }

    /// Returns the trimmed email when it is well formed
    #[track_caller]
    pub fn validate(&self) -> CoreResult<&str> {
        let email = self.email.trim();
        if !is_valid_email(email) {
            return Err(CoreError::Validation {
                message: "Please enter a valid email address".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        Ok(email)
    }
}
