use crate::{
    AssetsConfig, AuthConfig, BootstrapConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError,
    ConfigErrorResult, DEFAULT_CONFIG_DIR, LoggingConfig, RateLimitConfig, ServerConfig,
    SignatureConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub bootstrap: BootstrapConfig,
    pub assets: AssetsConfig,
    pub signature: SignatureConfig,
    pub logging: LoggingConfig,
    pub rate_limit: RateLimitConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. SG_CONFIG_DIR env var, else ./.sg/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply SG_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: SG_CONFIG_DIR env var > ./.sg/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate()?;
        self.bootstrap.validate()?;
        self.assets.validate()?;
        self.signature.validate()?;
        self.rate_limit.validate()?;

        // The bootstrap account must be able to reach the admin routes.
        if self.bootstrap.enabled && !self.auth.is_admin(&self.bootstrap.admin_email) {
            return Err(ConfigError::bootstrap(format!(
                "bootstrap.admin_email '{}' must also be listed in auth.admin_emails",
                self.bootstrap.admin_email
            )));
        }

        Ok(())
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);

        info!(
            "  auth: secret={}, ttl={}s, cookie={} (secure: {}), domain=@{}, admins={}",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "generated"
            },
            self.auth.session_ttl_secs,
            self.auth.cookie_name,
            self.auth.cookie_secure,
            self.auth.allowed_email_domain.trim_start_matches('@'),
            self.auth.admin_emails.len()
        );

        if self.bootstrap.enabled {
            info!(
                "  bootstrap: {} after {}ms (create if missing: {})",
                self.bootstrap.admin_email,
                self.bootstrap.delay_ms,
                self.bootstrap.create_if_missing
            );
        } else {
            info!("  bootstrap: disabled");
        }

        info!(
            "  assets: {} ({})",
            self.assets.logo_path().display(),
            self.assets.logo_content_type
        );

        info!(
            "  signature: logo width={}px, max upload={} bytes",
            self.signature.logo_target_width, self.signature.max_upload_bytes
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );

        info!(
            "  rate_limit: {}/{}s",
            self.rate_limit.max_requests, self.rate_limit.window_secs
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("SG_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("SG_SERVER_PORT", &mut self.server.port);

        // Auth
        Self::apply_env_option_string("SG_AUTH_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse(
            "SG_AUTH_SESSION_TTL_SECS",
            &mut self.auth.session_ttl_secs,
        );
        Self::apply_env_bool("SG_AUTH_COOKIE_SECURE", &mut self.auth.cookie_secure);
        Self::apply_env_string(
            "SG_AUTH_ALLOWED_EMAIL_DOMAIN",
            &mut self.auth.allowed_email_domain,
        );
        Self::apply_env_list("SG_AUTH_ADMIN_EMAILS", &mut self.auth.admin_emails);

        // Bootstrap
        Self::apply_env_bool("SG_BOOTSTRAP_ENABLED", &mut self.bootstrap.enabled);
        Self::apply_env_string("SG_BOOTSTRAP_ADMIN_EMAIL", &mut self.bootstrap.admin_email);
        Self::apply_env_parse("SG_BOOTSTRAP_DELAY_MS", &mut self.bootstrap.delay_ms);
        Self::apply_env_bool(
            "SG_BOOTSTRAP_CREATE_IF_MISSING",
            &mut self.bootstrap.create_if_missing,
        );

        // Assets
        Self::apply_env_string("SG_ASSETS_DIR", &mut self.assets.dir);
        Self::apply_env_string("SG_ASSETS_LOGO_FILE", &mut self.assets.logo_file);

        // Signature
        Self::apply_env_string("SG_SIGNATURE_LOGO_URL", &mut self.signature.logo_url);
        Self::apply_env_parse(
            "SG_SIGNATURE_LOGO_TARGET_WIDTH",
            &mut self.signature.logo_target_width,
        );

        // Logging
        Self::apply_env_parse("SG_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("SG_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("SG_LOG_FILE", &mut self.logging.file);

        // Rate limit
        Self::apply_env_parse(
            "SG_RATE_LIMIT_MAX_REQUESTS",
            &mut self.rate_limit.max_requests,
        );
        Self::apply_env_parse(
            "SG_RATE_LIMIT_WINDOW_SECS",
            &mut self.rate_limit.window_secs,
        );
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }

    /// Helper: Apply comma separated environment variable override for lists
    fn apply_env_list(var_name: &str, target: &mut Vec<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect();
        }
    }
}
