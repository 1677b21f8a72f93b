//! Claims carried inside backend-issued access tokens.

use serde::{Deserialize, Serialize};

/// Claim set encoded into (and recovered from) an access token.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Claims {
    /// Subject identifier (the username encoded at issuance)
    pub sub: String,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}
