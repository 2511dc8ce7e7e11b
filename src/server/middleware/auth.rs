use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};
use chrono::Utc;

use crate::server::{
    config::JwtConfig,
    error::{auth::AuthError, AppError},
    model::auth::{Claims, SEARCH_AUTHORITY},
    service::auth::AuthService,
    state::AppState,
};

const BEARER_PREFIX: &str = "Bearer ";

pub enum Permission {
    Search,
}

impl Permission {
    fn authority(&self) -> &'static str {
        match self {
            Permission::Search => SEARCH_AUTHORITY,
        }
    }
}

pub struct AuthGuard<'a> {
    config: &'a JwtConfig,
    headers: &'a HeaderMap,
}

impl<'a> AuthGuard<'a> {
    pub fn new(config: &'a JwtConfig, headers: &'a HeaderMap) -> Self {
        Self { config, headers }
    }

    /// Verifies the bearer token of the request and checks it grants every permission.
    ///
    /// # Returns
    /// - `Ok(Claims)` - Token valid, unexpired and carrying every required authority
    /// - `Err(AppError::AuthErr(_))` - Token missing, invalid, expired or lacking an authority
    pub fn require(&self, permissions: &[Permission]) -> Result<Claims, AppError> {
        let token = self
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix(BEARER_PREFIX))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingToken)?;

        let claims = AuthService::new(self.config).verify_token(token, Utc::now())?;

        for permission in permissions {
            let authority = permission.authority();
            if !claims.has_authority(authority) {
                return Err(
                    AuthError::MissingAuthority(claims.sub.clone(), authority.to_string()).into(),
                );
            }
        }

        Ok(claims)
    }
}

/// Rejects requests lacking a bearer token with the `SEARCH` authority.
///
/// Applied as a route layer on the customer search endpoint only.
pub async fn require_search(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = AuthGuard::new(&state.config.jwt, request.headers()).require(&[Permission::Search])?;

    tracing::debug!("Authorized {} for customer search", claims.sub);

    Ok(next.run(request).await)
}
