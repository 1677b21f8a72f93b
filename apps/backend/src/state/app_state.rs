use super::security_config::SecurityConfig;

/// Application state containing shared resources.
///
/// Shared via `web::Data` and read-only after startup; no request ever
/// mutates it.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Security configuration including JWT settings
    pub security: SecurityConfig,
}

impl AppState {
    /// Create a new AppState with the given security config
    pub fn new(security: SecurityConfig) -> Self {
        Self { security }
    }
}
