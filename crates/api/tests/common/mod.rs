#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use ucsb_api::auth::jwt::{generate_access_token, JwtConfig};
use ucsb_api::config::{LogFormat, ServerConfig, StoreBackend};
use ucsb_api::router::build_app_router;
use ucsb_api::state::AppState;
use ucsb_db::Stores;

/// Build a test `ServerConfig` with safe defaults and a known JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        log_format: LogFormat::Pretty,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over fresh in-memory stores.
pub fn build_test_app() -> Router {
    build_test_app_with(Stores::in_memory())
}

/// Build the full application router over the given stores, so a test can
/// seed records directly and then observe them through HTTP.
pub fn build_test_app_with(stores: Stores) -> Router {
    let config = test_config();
    let state = AppState {
        stores,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Bearer token for a principal holding only the `user` role.
pub fn user_token() -> String {
    generate_access_token("cgaucho@ucsb.edu", &["user"], &test_config().jwt)
        .expect("token generation should succeed")
}

/// Bearer token for a principal holding `user` and `admin`.
pub fn admin_token() -> String {
    generate_access_token("phtcon@ucsb.edu", &["user", "admin"], &test_config().jwt)
        .expect("token generation should succeed")
}

/// Send a request with an optional bearer token and optional body.
pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<(&'static str, String)>,
) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some((content_type, body)) => builder
            .header(CONTENT_TYPE, content_type)
            .body(Body::from(body)),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::GET, uri, Some(token), None).await
}

/// POST with every field in the query string and no body.
pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn post_form_auth(app: Router, uri: &str, token: &str, form: &str) -> Response {
    send(
        app,
        Method::POST,
        uri,
        Some(token),
        Some(("application/x-www-form-urlencoded", form.to_string())),
    )
    .await
}

pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    json: serde_json::Value,
) -> Response {
    send(
        app,
        Method::PUT,
        uri,
        Some(token),
        Some(("application/json", json.to_string())),
    )
    .await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None, None).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
