use std::time::Duration;

use jsonwebtoken::Algorithm;

/// Default access-token lifetime (24 hours), matching the issuer's
/// `APP_TOKEN_TTL_MINUTES` default.
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(1440 * 60);

/// Configuration for JWT security settings.
///
/// Constructed once at process start and injected into [`crate::state::app_state::AppState`];
/// the authenticator never reads the secret from ambient global state.
#[derive(Debug, Clone)]
pub struct SecurityConfig {
    /// JWT secret key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (defaults to HS256)
    pub algorithm: Algorithm,
    /// Lifetime of minted access tokens
    pub token_ttl: Duration,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given JWT secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
            token_ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Override the access-token lifetime
    pub fn with_token_ttl(mut self, token_ttl: Duration) -> Self {
        self.token_ttl = token_ttl;
        self
    }
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self::new(b"default_secret_for_tests_only".to_vec())
    }
}
