use crate::{Metrics, ShutdownCoordinator};

use sg_auth::{AuthRateLimiter, JwtValidator, RateLimitConfig, SessionIssuer, generate_secret};
use sg_config::{AssetsConfig, AuthConfig, Config, SignatureConfig};
use sg_core::SignatureTemplate;
use sg_store::UserStore;

use std::sync::Arc;

use log::warn;
use metrics_exporter_prometheus::PrometheusHandle;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: UserStore,
    pub session_issuer: Arc<SessionIssuer>,
    pub jwt_validator: Arc<JwtValidator>,
    pub rate_limiter: AuthRateLimiter,
    pub template: Arc<SignatureTemplate>,
    pub auth: Arc<AuthConfig>,
    pub assets: Arc<AssetsConfig>,
    pub signature: Arc<SignatureConfig>,
    pub metrics: Metrics,
    pub metrics_handle: PrometheusHandle,
    pub shutdown: ShutdownCoordinator,
}

impl AppState {
    /// Wire the state from validated configuration.
    ///
    /// Without `auth.jwt_secret` a random secret is generated, so sessions
    /// are only valid for the lifetime of this process.
    pub fn from_config(
        config: &Config,
        store: UserStore,
        metrics_handle: PrometheusHandle,
        shutdown: ShutdownCoordinator,
    ) -> Self {
        let secret = match &config.auth.jwt_secret {
            Some(secret) => secret.clone(),
            None => {
                warn!("auth.jwt_secret not set, sessions will not survive a restart");
                generate_secret()
            }
        };

        let rate_limiter = AuthRateLimiter::new(RateLimitConfig {
            max_requests: config.rate_limit.max_requests,
            window_secs: config.rate_limit.window_secs,
        });

        Self {
            store,
            session_issuer: Arc::new(SessionIssuer::with_hs256(
                secret.as_bytes(),
                config.auth.session_ttl_secs,
            )),
            jwt_validator: Arc::new(JwtValidator::with_hs256(secret.as_bytes())),
            rate_limiter,
            template: Arc::new(SignatureTemplate::new(config.signature.logo_url.clone())),
            auth: Arc::new(config.auth.clone()),
            assets: Arc::new(config.assets.clone()),
            signature: Arc::new(config.signature.clone()),
            metrics: Metrics::new(),
            metrics_handle,
            shutdown,
        }
    }
}
