//! Per-request access logging.

use axum::{
    extract::{MatchedPath, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use std::time::Instant;
use tracing::{error, info, warn};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Logs every request with its id, route, status and latency, and echoes the
/// request id back in the `x-request-id` response header.
///
/// 4xx responses are logged at `warn`, 5xx at `error`.
pub async fn logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req
        .extensions()
        .get::<MatchedPath>()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| req.uri().path().to_string());
    let request_id = Uuid::new_v4().to_string();

    info!(request_id = %request_id, method = %method, path = %path, "Incoming request");

    let mut response = next.run(req).await;
    let latency_ms = start.elapsed().as_millis();
    let status = response.status().as_u16();

    macro_rules! completed {
        ($level:ident, $message:literal) => {
            $level!(
                request_id = %request_id,
                method = %method,
                path = %path,
                status,
                latency_ms = %latency_ms,
                $message
            )
        };
    }

    match status {
        400..=499 => completed!(warn, "Client error"),
        500..=599 => completed!(error, "Server error"),
        _ => completed!(info, "Request completed"),
    }

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response
}
