use serde::{Deserialize, Serialize};

pub const DEFAULT_NAME: &str = "Your Name";
pub const DEFAULT_TITLE: &str = "Your Title";
pub const DEFAULT_EMAIL: &str = "your.email@socialmarketing.com";
pub const DEFAULT_PHONE_PLACEHOLDER: &str = "Your Phone";

/// The four user-editable values a signature is built from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureFields {
    pub name: String,
    pub title: String,
    pub email: String,
    pub phone: String,
}

impl SignatureFields {
    pub fn new(
        name: impl Into<String>,
        title: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            title: title.into(),
            email: email.into(),
            phone: phone.into(),
        }
    }

    pub fn display_name(&self) -> &str {
        or_default(&self.name, DEFAULT_NAME)
    }

    pub fn display_title(&self) -> &str {
        or_default(&self.title, DEFAULT_TITLE)
    }

    pub fn display_email(&self) -> &str {
        or_default(&self.email, DEFAULT_EMAIL)
    }

    pub fn display_phone(&self) -> &str {
        or_default(&self.phone, DEFAULT_PHONE_PLACEHOLDER)
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}
