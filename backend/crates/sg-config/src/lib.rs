mod assets_config;
mod auth_config;
mod bootstrap_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod rate_limit_config;
mod server_config;
mod signature_config;

pub use assets_config::AssetsConfig;
pub use auth_config::AuthConfig;
pub use bootstrap_config::BootstrapConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use rate_limit_config::RateLimitConfig;
pub use server_config::ServerConfig;
pub use signature_config::SignatureConfig;

const CONFIG_DIR_ENV: &str = "SG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sg";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 5000;
const MIN_PORT: u16 = 1024;

// Auth
const MIN_JWT_SECRET_LENGTH: usize = 32;
const DEFAULT_SESSION_TTL_SECS: u64 = 7 * 24 * 60 * 60;
const MIN_SESSION_TTL_SECS: u64 = 60;
const MAX_SESSION_TTL_SECS: u64 = 365 * 24 * 60 * 60;
const DEFAULT_COOKIE_NAME: &str = "sg_session";
const DEFAULT_ADMIN_EMAIL: &str = "admin@socialmarketing.com";

// Bootstrap
const DEFAULT_ADMIN_NAME: &str = "Administrator";
const DEFAULT_BOOTSTRAP_DELAY_MS: u64 = 1000;
const MAX_BOOTSTRAP_DELAY_MS: u64 = 60_000;
const DEFAULT_BOOTSTRAP_APPROVER: &str = "system";

// Assets
const DEFAULT_ASSETS_DIR: &str = "attached_assets";
const DEFAULT_LOGO_FILE: &str = "LogoBuildBWA30sm_1752522862500.jpg";
const DEFAULT_LOGO_CONTENT_TYPE: &str = "image/jpeg";
const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 31_536_000;

// Signature
const MIN_LOGO_TARGET_WIDTH: u32 = 1;
const MAX_LOGO_TARGET_WIDTH: u32 = 2000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

// Logging
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";

#[cfg(test)]
mod tests;
