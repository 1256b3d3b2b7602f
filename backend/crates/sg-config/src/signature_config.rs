use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MAX_UPLOAD_BYTES, MAX_LOGO_TARGET_WIDTH,
    MIN_LOGO_TARGET_WIDTH,
};

use serde::Deserialize;
use sg_core::DEFAULT_LOGO_TARGET_WIDTH;
use sg_core::signature::signature_template::DEFAULT_LOGO_URL;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    /// Hosted logo referenced by the rendered HTML
    pub logo_url: String,
    pub logo_target_width: u32,
    /// Largest logo upload accepted by the resize endpoint
    pub max_upload_bytes: usize,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            logo_url: String::from(DEFAULT_LOGO_URL),
            logo_target_width: DEFAULT_LOGO_TARGET_WIDTH,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

impl SignatureConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !(self.logo_url.starts_with("https://") || self.logo_url.starts_with("http://")) {
            return Err(ConfigError::signature(format!(
                "signature.logo_url must be an http(s) URL, got '{}'",
                self.logo_url
            )));
        }

        if self.logo_target_width < MIN_LOGO_TARGET_WIDTH
            || self.logo_target_width > MAX_LOGO_TARGET_WIDTH
        {
            return Err(ConfigError::signature(format!(
                "signature.logo_target_width must be {}-{}, got {}",
                MIN_LOGO_TARGET_WIDTH, MAX_LOGO_TARGET_WIDTH, self.logo_target_width
            )));
        }

        if self.max_upload_bytes == 0 {
            return Err(ConfigError::signature(
                "signature.max_upload_bytes must be greater than 0",
            ));
        }

        Ok(())
    }
}
