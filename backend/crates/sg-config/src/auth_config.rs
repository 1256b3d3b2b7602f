use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_COOKIE_NAME,
    DEFAULT_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, MIN_JWT_SECRET_LENGTH, MIN_SESSION_TTL_SECS,
};

use serde::Deserialize;
use sg_core::{DEFAULT_EMAIL_DOMAIN, has_domain_suffix, is_valid_email};

/// Session and access-control settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. A random one is generated at startup when unset,
    /// so sessions end with the process.
    pub jwt_secret: Option<String>,
    pub session_ttl_secs: u64,
    pub cookie_name: String,
    pub cookie_secure: bool,
    /// Only addresses in this domain may request access
    pub allowed_email_domain: String,
    /// Approved users whose email is listed here may use the admin endpoints
    pub admin_emails: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            session_ttl_secs: DEFAULT_SESSION_TTL_SECS,
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            cookie_secure: false,
            allowed_email_domain: String::from(DEFAULT_EMAIL_DOMAIN),
            admin_emails: vec![String::from(DEFAULT_ADMIN_EMAIL)],
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(secret) = &self.jwt_secret
            && secret.len() < MIN_JWT_SECRET_LENGTH
        {
            return Err(ConfigError::auth(format!(
                "auth.jwt_secret must be at least {} characters, got {}",
                MIN_JWT_SECRET_LENGTH,
                secret.len()
            )));
        }

        if self.session_ttl_secs < MIN_SESSION_TTL_SECS
            || self.session_ttl_secs > MAX_SESSION_TTL_SECS
        {
            return Err(ConfigError::auth(format!(
                "auth.session_ttl_secs must be {}-{}, got {}",
                MIN_SESSION_TTL_SECS, MAX_SESSION_TTL_SECS, self.session_ttl_secs
            )));
        }

        if self.cookie_name.is_empty()
            || !self
                .cookie_name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name must be non-empty [A-Za-z0-9_-], got '{}'",
                self.cookie_name
            )));
        }

        if self.allowed_email_domain.trim().trim_start_matches('@').is_empty() {
            return Err(ConfigError::auth("auth.allowed_email_domain cannot be empty"));
        }

        for email in &self.admin_emails {
            if !is_valid_email(email) || !has_domain_suffix(email, &self.allowed_email_domain) {
                return Err(ConfigError::auth(format!(
                    "auth.admin_emails entry '{}' is not an address in {}",
                    email, self.allowed_email_domain
                )));
            }
        }

        Ok(())
    }

    /// Whether `email` is one of the configured admins (case-insensitive)
    pub fn is_admin(&self, email: &str) -> bool {
        self.admin_emails
            .iter()
            .any(|admin| admin.eq_ignore_ascii_case(email.trim()))
    }
}
