use crate::server::{
    config::{Config, JwtConfig, NotifierConfig, OrderConfig},
    router::router,
    state::AppState,
};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use sea_orm::{DatabaseConnection, DbErr};
use serde_json::{json, Value};
use std::sync::Arc;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;


fn app(db: &DatabaseConnection) -> Router {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        order: OrderConfig {
            unit_price: 1.0,
            expiration_minutes: 5,
        },
        notifier: NotifierConfig {
            enabled: false,
            webhook: None,
        },
        jwt: JwtConfig {
            secret: "router-test-secret".to_string(),
            expiration_seconds: 3600,
        },
    };

    router(AppState::new(db.clone(), Arc::new(config)))
}

fn json_request(method: Method, uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn order_body(email: &str, pilotes_number: &str) -> String {
    json!({
        "deliveryAddress": {
            "street": "785 Cabell Avenue",
            "postcode": "23219",
            "city": "Raccoon",
            "country": "USA"
        },
        "pilotesNumber": pilotes_number,
        "customer": { "email": email }
    })
    .to_string()
}

async fn login(app: &Router, username: &str) -> String {
    let request = Request::builder()
        .method(Method::POST)
        .uri(format!("/v1.0/auth/login?username={}&password=secret", username))
        .body(Body::empty())
        .unwrap();

    let (status, token) = send(app, request).await;
    assert_eq!(status, StatusCode::OK);

    token
}
