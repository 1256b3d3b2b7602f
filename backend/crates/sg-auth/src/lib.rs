pub mod auth_rate_limiter;
pub mod claims;
pub mod error;
pub mod jwt_validator;
pub mod rate_limit_config;
pub mod session_cookie;
pub mod session_issuer;

pub use auth_rate_limiter::AuthRateLimiter;
pub use claims::Claims;
pub use error::{AuthError, Result};
pub use jwt_validator::JwtValidator;
pub use rate_limit_config::RateLimitConfig;
pub use session_cookie::{
    bearer_token, clear_session_cookie, cookie_value, session_cookie,
};
pub use session_issuer::{SessionIssuer, SessionToken, generate_secret};
