//! Shared helpers for the in-crate router tests.

use crate::config::Config;
use crate::gateway::Gateway;
use crate::gateway::memory::MemoryGateway;
use crate::gateway::models::UserRecord;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode, header};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "ana@example.com";
pub const EDITOR_EMAIL: &str = "eva@example.com";
pub const INACTIVE_EMAIL: &str = "leo@example.com";
pub const PASSWORD: &str = "secreta123";

/// Gateway seeded with one admin, one editor and one inactive account.
pub fn seeded_gateway() -> Arc<MemoryGateway> {
    // Minimum cost keeps the suite fast.
    let hash = bcrypt::hash(PASSWORD, 4).unwrap();

    Arc::new(MemoryGateway::with_users(vec![
        UserRecord {
            id: 1,
            email: ADMIN_EMAIL.to_string(),
            password: hash.clone(),
            role: "admin".to_string(),
            active: true,
        },
        UserRecord {
            id: 2,
            email: EDITOR_EMAIL.to_string(),
            password: hash.clone(),
            role: "editor".to_string(),
            active: true,
        },
        UserRecord {
            id: 3,
            email: INACTIVE_EMAIL.to_string(),
            password: hash,
            role: "editor".to_string(),
            active: false,
        },
    ]))
}

fn test_config() -> Config {
    Config {
        data_api_url: "http://localhost".to_string(),
        data_api_key: "test-key".to_string(),
        session_secret: "0123456789abcdef0123456789abcdef0123456789abcdef".to_string(),
        server_port: 0,
        static_dir: "public".to_string(),
    }
}

/// Full application router over the given gateway, with a live session layer.
pub fn test_app(gateway: Arc<MemoryGateway>) -> Router {
    crate::app(gateway as Arc<dyn Gateway>, &test_config())
}

/// One-shot request against the router, optionally with a session cookie and
/// a JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    cookie: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

/// Decodes a response body as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Logs in and returns the session cookie pair for subsequent requests.
pub async fn login(app: &Router, email: &str) -> String {
    let response = send(
        app,
        "POST",
        "/api/login",
        None,
        Some(json!({ "email": email, "password": PASSWORD })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap();

    cookie.split(';').next().unwrap().to_string()
}
