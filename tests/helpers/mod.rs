#![allow(dead_code)]
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;
use userbook::application::services::UserService;
use userbook::bootstrap::app_state_with_repository;
use userbook::domain::entities::CreateUserRequest;
use userbook::infrastructure::http::router::build_router;
use userbook::infrastructure::persistence::Database;

pub fn setup_service() -> UserService {
    UserService::new(Arc::new(Database::new()))
}

pub fn setup_app() -> Router {
    build_router(app_state_with_repository(Arc::new(Database::new())))
}

pub fn create_request(name: &str, email: &str, age: i32) -> CreateUserRequest {
    CreateUserRequest {
        name: name.to_string(),
        email: email.to_string(),
        age,
    }
}

/// Send one request through the router and decode the JSON body.
///
/// An empty body decodes to `Value::Null`.
pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}
