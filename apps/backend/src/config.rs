//! Environment-sourced process configuration.
//!
//! Environment variables must be set by the runtime environment:
//! - Docker: via docker-compose env_file or docker run --env-file
//! - Local dev: source env files manually (e.g., set -a; . ./.env; set +a)

use std::time::Duration;

use crate::error::AppError;
use crate::state::security_config::SecurityConfig;

const DEFAULT_TOKEN_TTL_MINUTES: u64 = 1440;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub security: SecurityConfig,
}

impl AppConfig {
    /// Read configuration from the environment. Called once at process
    /// start; an unusable value is a startup error, never a per-request
    /// one. `APP_JWT_SECRET` is required, everything else has a default.
    pub fn from_env() -> Result<Self, AppError> {
        let host = std::env::var("BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("BACKEND_PORT")
            .unwrap_or_else(|_| "3001".to_string())
            .parse::<u16>()
            .map_err(|_| AppError::config("BACKEND_PORT must be a valid port number".to_string()))?;

        let secret = std::env::var("APP_JWT_SECRET")
            .map_err(|_| AppError::config("APP_JWT_SECRET must be set".to_string()))?;
        if secret.is_empty() {
            return Err(AppError::config("APP_JWT_SECRET must not be empty".to_string()));
        }

        let ttl_minutes = match std::env::var("APP_TOKEN_TTL_MINUTES") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                AppError::config("APP_TOKEN_TTL_MINUTES must be a positive integer".to_string())
            })?,
            Err(_) => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let token_ttl = ttl_minutes
            .checked_mul(60)
            .map(Duration::from_secs)
            .ok_or_else(|| {
                AppError::config("APP_TOKEN_TTL_MINUTES is too large".to_string())
            })?;

        let security = SecurityConfig::new(secret.into_bytes()).with_token_ttl(token_ttl);

        Ok(Self {
            host,
            port,
            security,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use serial_test::serial;

    use super::AppConfig;
    use crate::error::AppError;

    fn clear_env() {
        for var in [
            "BACKEND_HOST",
            "BACKEND_PORT",
            "APP_JWT_SECRET",
            "APP_TOKEN_TTL_MINUTES",
        ] {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn missing_secret_is_a_config_error() {
        clear_env();

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(AppError::Config { .. })));
    }

    #[test]
    #[serial]
    fn defaults_apply_when_only_secret_is_set() {
        clear_env();
        std::env::set_var("APP_JWT_SECRET", "unit-test-secret");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.security.jwt_secret, b"unit-test-secret");
        assert_eq!(config.security.token_ttl, Duration::from_secs(1440 * 60));

        clear_env();
    }

    #[test]
    #[serial]
    fn ttl_override_is_honored() {
        clear_env();
        std::env::set_var("APP_JWT_SECRET", "unit-test-secret");
        std::env::set_var("APP_TOKEN_TTL_MINUTES", "15");

        let config = AppConfig::from_env().unwrap();
        assert_eq!(config.security.token_ttl, Duration::from_secs(15 * 60));

        clear_env();
    }

    #[test]
    #[serial]
    fn oversized_ttl_is_a_config_error() {
        clear_env();
        std::env::set_var("APP_JWT_SECRET", "unit-test-secret");
        std::env::set_var("APP_TOKEN_TTL_MINUTES", u64::MAX.to_string());

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(AppError::Config { .. })));

        clear_env();
    }

    #[test]
    #[serial]
    fn invalid_port_is_a_config_error() {
        clear_env();
        std::env::set_var("APP_JWT_SECRET", "unit-test-secret");
        std::env::set_var("BACKEND_PORT", "not-a-port");

        let result = AppConfig::from_env();
        assert!(matches!(result, Err(AppError::Config { .. })));

        clear_env();
    }
}
