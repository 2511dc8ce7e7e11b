use super::*;

/// Tests a token carrying the search authority passes the search permission check.
///
/// Expected: Ok(Claims) for the admin subject
#[test]
fn grants_access_with_search_authority() {
    let config = jwt_config();
    let token = AuthService::new(&config)
        .issue_token("admin", vec!["SEARCH".to_string()], Utc::now())
        .unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&config, &headers).require(&[Permission::Search]);

    assert!(result.is_ok());
    assert_eq!(result.unwrap().sub, "admin");
}

/// Tests a valid token without the search authority is denied.
///
/// Expected: Err(AuthError::MissingAuthority)
#[test]
fn denies_access_without_search_authority() {
    let config = jwt_config();
    let token = AuthService::new(&config)
        .issue_token("guest", Vec::new(), Utc::now())
        .unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&config, &headers).require(&[Permission::Search]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingAuthority(_, _)))
    ));
}

/// Tests a request without an Authorization header is denied.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_without_token() {
    let config = jwt_config();
    let headers = HeaderMap::new();

    let result = AuthGuard::new(&config, &headers).require(&[Permission::Search]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests a non-bearer Authorization header is denied.
///
/// Expected: Err(AuthError::MissingToken)
#[test]
fn denies_access_with_basic_credentials() {
    let config = jwt_config();
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic YWRtaW46YWRtaW4="));

    let result = AuthGuard::new(&config, &headers).require(&[Permission::Search]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::MissingToken))
    ));
}

/// Tests an expired token is denied even with the search authority.
///
/// Expected: Err(AuthError::TokenExpired)
#[test]
fn denies_access_with_expired_token() {
    let config = jwt_config();
    let token = AuthService::new(&config)
        .issue_token(
            "admin",
            vec!["SEARCH".to_string()],
            Utc::now() - Duration::hours(2),
        )
        .unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&config, &headers).require(&[Permission::Search]);

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::TokenExpired(_)))
    ));
}

/// Tests an empty permission list only checks the token itself.
///
/// Expected: Ok(Claims) for a token without authorities
#[test]
fn empty_permissions_only_require_valid_token() {
    let config = jwt_config();
    let token = AuthService::new(&config)
        .issue_token("guest", Vec::new(), Utc::now())
        .unwrap();
    let headers = bearer_headers(&token);

    let result = AuthGuard::new(&config, &headers).require(&[]);

    assert!(result.is_ok());
}
