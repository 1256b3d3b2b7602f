use crate::{CoreError, NewUser, Result as CoreResult, has_domain_suffix, is_valid_email};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Access request as submitted from the login page
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccessRequestForm {
    pub email: String,
    pub name: String,
}

impl AccessRequestForm {
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
        }
    }

    /// Check the request and turn it into a [`NewUser`].
    ///
    /// The email must be well formed and end with `@{allowed_domain}`; the
    /// name must not be blank. Surrounding whitespace is trimmed.
    #[track_caller]
    pub fn validate(&self, allowed_domain: &str) -> CoreResult<NewUser> {
        let email = self.email.trim();
        let name = self.name.trim();

        if !is_valid_email(email) {
            return Err(CoreError::Validation {
                message: "Please enter a valid email address".to_string(),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if !has_domain_suffix(email, allowed_domain) {
            return Err(CoreError::Validation {
                message: format!(
                    "Only BWA employees with @{} email addresses can request access",
                    allowed_domain.trim_start_matches('@')
                ),
                field: Some("email".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if name.is_empty() {
            return Err(CoreError::Validation {
                message: "Please enter your full name".to_string(),
                field: Some("name".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(NewUser::new(email, name))
    }
}
