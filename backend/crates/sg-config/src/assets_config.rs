use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ASSETS_DIR, DEFAULT_CACHE_MAX_AGE_SECS,
    DEFAULT_LOGO_CONTENT_TYPE, DEFAULT_LOGO_FILE,
};

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Static files served by the logo route.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Relative to the working directory
    pub dir: String,
    pub logo_file: String,
    pub logo_content_type: String,
    pub cache_max_age_secs: u64,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: String::from(DEFAULT_ASSETS_DIR),
            logo_file: String::from(DEFAULT_LOGO_FILE),
            logo_content_type: String::from(DEFAULT_LOGO_CONTENT_TYPE),
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
        }
    }
}

impl AssetsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if Path::new(&self.dir).is_absolute() || self.dir.contains("..") {
            return Err(ConfigError::assets(
                "assets.dir must be relative and cannot contain '..'",
            ));
        }

        if self.logo_file.is_empty()
            || self.logo_file.contains("..")
            || self.logo_file.contains('/')
            || self.logo_file.contains('\\')
        {
            return Err(ConfigError::assets(format!(
                "assets.logo_file must be a plain file name, got '{}'",
                self.logo_file
            )));
        }

        if !self.logo_content_type.starts_with("image/") {
            return Err(ConfigError::assets(format!(
                "assets.logo_content_type must be an image type, got '{}'",
                self.logo_content_type
            )));
        }

        Ok(())
    }

    /// Path of the served logo file.
    pub fn logo_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.logo_file)
    }
}
