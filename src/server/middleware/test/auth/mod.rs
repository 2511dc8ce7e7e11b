use crate::server::{
    config::JwtConfig,
    error::{auth::AuthError, AppError},
    middleware::auth::{AuthGuard, Permission},
    service::auth::AuthService,
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use chrono::{Duration, Utc};

mod require;

fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: "middleware-test-secret".to_string(),
        expiration_seconds: 3600,
    }
}

fn bearer_headers(token: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {}", token)).unwrap(),
    );
    headers
}
