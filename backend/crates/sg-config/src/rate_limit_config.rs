use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const DEFAULT_RATE_LIMIT_REQUESTS: u32 = 30;
pub const DEFAULT_RATE_LIMIT_WINDOW_SECS: u64 = 60;

/// Rate limiting for login and access requests.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Window duration in seconds
    pub window_secs: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_REQUESTS,
            window_secs: DEFAULT_RATE_LIMIT_WINDOW_SECS,
        }
    }
}

impl RateLimitConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.max_requests == 0 {
            return Err(ConfigError::config(
                "rate_limit.max_requests must be at least 1",
            ));
        }

        if self.window_secs == 0 {
            return Err(ConfigError::config(
                "rate_limit.window_secs must be at least 1",
            ));
        }

        Ok(())
    }
}
