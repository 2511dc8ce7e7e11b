use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{pilotes::PilotesError, AppError},
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "Authentication";

/// Query parameters of the login endpoint.
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LoginParams {
    pub username: String,
    /// Accepted without verification.
    pub password: String,
}

/// Authenticate a user and return a signed bearer token.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Token as plain text, `admin` receives the `SEARCH` authority
/// - `400 Bad Request` - Missing username or password
/// - `500 Internal Server Error` - Token could not be signed
#[utoipa::path(
    post,
    path = "/v1.0/auth/login",
    tag = AUTH_TAG,
    params(LoginParams),
    responses(
        (status = 200, description = "Authentication successful", body = String, content_type = "text/plain"),
        (status = 400, description = "Missing credentials", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    params: Result<Query<LoginParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(PilotesError::from)?;

    let token = AuthService::new(&state.config.jwt)
        .login(&params.username, &params.password)
        .await?;

    Ok((StatusCode::OK, token))
}
