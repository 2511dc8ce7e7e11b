//! Token issuing and verification.
//!
//! Tokens are compact JWS strings signed with HS512 over the configured secret.

use chrono::{DateTime, Utc};
use jsonwebtoken::{
    decode, decode_header, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey,
    Header, Validation,
};

use crate::server::{
    config::JwtConfig,
    error::{auth::AuthError, internal::InternalError, AppError},
    model::auth::{Claims, SEARCH_AUTHORITY, TOKEN_ID},
};

const ALGORITHM: Algorithm = Algorithm::HS512;

/// Username granted the search authority on login.
const ADMIN_USERNAME: &str = "admin";

pub struct AuthService<'a> {
    config: &'a JwtConfig,
}

impl<'a> AuthService<'a> {
    pub fn new(config: &'a JwtConfig) -> Self {
        Self { config }
    }

    /// Logs a user in and returns a signed bearer token.
    ///
    /// Credentials are not checked; only the `admin` user receives the `SEARCH`
    /// authority.
    ///
    /// # Arguments
    /// - `username` - Subject of the issued token
    /// - `_password` - Accepted without verification
    ///
    /// # Returns
    /// - `Ok(String)` - Compact JWS token
    /// - `Err(AppError::InternalErr)` - Token could not be encoded or signed
    pub async fn login(&self, username: &str, _password: &str) -> Result<String, AppError> {
        let authorities = if username == ADMIN_USERNAME {
            vec![SEARCH_AUTHORITY.to_string()]
        } else {
            Vec::new()
        };

        let token = self.issue_token(username, authorities, Utc::now())?;

        tracing::info!("Issued token for user {}", username);

        Ok(token)
    }

    /// Signs a token for `subject` valid from `issued_at` for the configured lifetime.
    pub fn issue_token(
        &self,
        subject: &str,
        authorities: Vec<String>,
        issued_at: DateTime<Utc>,
    ) -> Result<String, InternalError> {
        let iat = issued_at.timestamp();
        let claims = Claims {
            jti: TOKEN_ID.to_string(),
            sub: subject.to_string(),
            authorities,
            iat,
            exp: iat.saturating_add(self.config.expiration_seconds),
        };

        let token = encode(
            &Header::new(ALGORITHM),
            &claims,
            &EncodingKey::from_secret(self.config.secret.as_bytes()),
        )?;

        Ok(token)
    }

    /// Verifies the signature and expiry of a token and returns its claims.
    ///
    /// Expiry is checked against `now` without leeway.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token is authentic and unexpired at `now`
    /// - `Err(AuthError)` - Token is malformed, forged, uses another algorithm or expired
    pub fn verify_token(&self, token: &str, now: DateTime<Utc>) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|e| AuthError::MalformedToken(e.to_string()))?;
        if header.alg != ALGORITHM {
            return Err(AuthError::UnsupportedAlgorithm(format!("{:?}", header.alg)));
        }

        let mut validation = Validation::new(ALGORITHM);
        validation.validate_exp = false;

        let claims = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.secret.as_bytes()),
            &validation,
        )
        .map_err(|e| match e.kind() {
            ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedToken(e.to_string()),
        })?
        .claims;

        if now.timestamp() >= claims.exp {
            return Err(AuthError::TokenExpired(claims.exp));
        }

        Ok(claims)
    }
}
