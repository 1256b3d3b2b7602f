use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ADMIN_EMAIL, DEFAULT_ADMIN_NAME,
    DEFAULT_BOOTSTRAP_APPROVER, DEFAULT_BOOTSTRAP_DELAY_MS, MAX_BOOTSTRAP_DELAY_MS,
};

use serde::Deserialize;
use sg_core::is_valid_email;

/// Startup approval of the administrator account.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    pub enabled: bool,
    pub admin_email: String,
    /// Name used when the admin record has to be created
    pub admin_name: String,
    pub delay_ms: u64,
    /// Recorded as `approvedBy` on the admin record
    pub approved_by: String,
    /// Create the admin record when nobody has requested access with it yet
    pub create_if_missing: bool,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            admin_email: String::from(DEFAULT_ADMIN_EMAIL),
            admin_name: String::from(DEFAULT_ADMIN_NAME),
            delay_ms: DEFAULT_BOOTSTRAP_DELAY_MS,
            approved_by: String::from(DEFAULT_BOOTSTRAP_APPROVER),
            create_if_missing: true,
        }
    }
}

impl BootstrapConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.delay_ms > MAX_BOOTSTRAP_DELAY_MS {
            return Err(ConfigError::bootstrap(format!(
                "bootstrap.delay_ms must be <= {}, got {}",
                MAX_BOOTSTRAP_DELAY_MS, self.delay_ms
            )));
        }

        if !self.enabled {
            return Ok(());
        }

        if !is_valid_email(&self.admin_email) {
            return Err(ConfigError::bootstrap(format!(
                "bootstrap.admin_email '{}' is not a valid email address",
                self.admin_email
            )));
        }

        if self.approved_by.trim().is_empty() {
            return Err(ConfigError::bootstrap("bootstrap.approved_by cannot be empty"));
        }

        if self.create_if_missing && self.admin_name.trim().is_empty() {
            return Err(ConfigError::bootstrap(
                "bootstrap.admin_name cannot be empty when create_if_missing is set",
            ));
        }

        Ok(())
    }
}
