#![allow(dead_code)]

use activity_signup::services::{activities_service::CapacityPolicy, catalog};
use activity_signup::web::{self, state::AppState};
use axum::{
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub json: Value,
}

impl TestResponse {
    pub fn detail(&self) -> String {
        self.json["detail"].as_str().unwrap_or_default().to_lowercase()
    }

    pub fn message(&self) -> String {
        self.json["message"].as_str().unwrap_or_default().to_lowercase()
    }
}

pub async fn app() -> Router {
    app_with(CapacityPolicy::Advisory).await
}

pub async fn app_with(capacity: CapacityPolicy) -> Router {
    let state = AppState::bootstrap(&catalog::default_catalog(), capacity)
        .await
        .expect("seed in-memory directory");
    web::build_router(state, concat!(env!("CARGO_MANIFEST_DIR"), "/static"))
}

pub async fn send(app: &Router, method: Method, uri: &str) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("build request");
    let response = app.clone().oneshot(request).await.expect("router is infallible");

    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        json,
    }
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri).await
}

pub async fn post(app: &Router, uri: &str) -> TestResponse {
    send(app, Method::POST, uri).await
}

pub async fn participants(app: &Router, activity: &str) -> Vec<String> {
    let listed = get(app, "/activities").await;
    listed.json[activity]["participants"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}
