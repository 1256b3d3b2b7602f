use crate::CoreError;

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Editable inputs of the signature form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Name,
    Title,
    Email,
    Phone,
}

impl FormField {
    pub const ALL: [FormField; 4] = [Self::Name, Self::Title, Self::Email, Self::Phone];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Title => "title",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "name" => Ok(Self::Name),
            "title" => Ok(Self::Title),
            "email" => Ok(Self::Email),
            "phone" => Ok(Self::Phone),
            _ => Err(CoreError::Validation {
                message: format!("Unknown form field: {}", s),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
