use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rand::{Rng, distr::Alphanumeric};

const GENERATED_SECRET_LENGTH: usize = 64;

/// Random secret for processes started without a configured one.
///
/// Sessions signed with it do not survive a restart, which matches the
/// lifetime of the in-memory user store.
pub fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_SECRET_LENGTH)
        .map(char::from)
        .collect()
}

/// A signed session token and when it stops being valid
#[derive(Debug, Clone)]
pub struct SessionToken {
    pub token: String,
    pub expires_at: i64,
    pub max_age_secs: u64,
}

/// Signs session tokens with the shared HS256 secret
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    ttl_secs: u64,
}

impl SessionIssuer {
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a token for `user_id` / `email`, valid for the configured TTL
    #[track_caller]
    pub fn issue(&self, user_id: u64, email: &str) -> AuthErrorResult<SessionToken> {
        let now = Utc::now().timestamp();
        let expires_at = now + self.ttl_secs as i64;

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: expires_at,
            iat: now,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AuthError::JwtEncode {
                source: e,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(SessionToken {
            token,
            expires_at,
            max_age_secs: self.ttl_secs,
        })
    }
}
