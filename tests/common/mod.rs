use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use edunav::modules::access::PermissionTable;
use edunav::modules::navigation::NavigationResolver;
use edunav::router::init_router;
use edunav::state::AppState;
use edunav_config::{CorsConfig, SessionConfig};

/// Router over fresh built-in state. Clone it to send several requests
/// against the same session registry.
pub fn setup_test_app() -> axum::Router {
    let state = AppState::new(
        PermissionTable::builtin(),
        NavigationResolver::builtin(),
        SessionConfig::default(),
        CorsConfig::default(),
    );
    init_router(state)
}

/// Send a request and return the status with the JSON body
/// (`Value::Null` for an empty body).
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Start a session and return its id.
#[allow(dead_code)]
pub async fn start_session(app: &axum::Router, role: &str) -> String {
    let (status, body) = send(
        app,
        "POST",
        "/api/sessions",
        Some(json!({ "role": role, "user_id": Uuid::new_v4() })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["id"].as_str().unwrap().to_string()
}

#[allow(dead_code)]
pub fn entity(name: &str) -> Value {
    json!({ "id": Uuid::new_v4(), "name": name })
}
