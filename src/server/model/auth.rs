//! Bearer token content.

use serde::{Deserialize, Serialize};

/// Fixed token identifier carried by every issued token.
pub const TOKEN_ID: &str = "pilotes-jwt";

/// Authority granting access to the customer search.
pub const SEARCH_AUTHORITY: &str = "SEARCH";

/// Claims of an issued token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub jti: String,
    /// Username the token was issued to.
    pub sub: String,
    pub authorities: Vec<String>,
    /// Issued-at, seconds since the Unix epoch.
    pub iat: i64,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
}

impl Claims {
    pub fn has_authority(&self, authority: &str) -> bool {
        self.authorities.iter().any(|a| a == authority)
    }
}
