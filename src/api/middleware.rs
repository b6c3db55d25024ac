//! Middleware for the activities API
//!
//! The stack is applied in this order (outer to inner):
//! 1. Request ID generation/propagation
//! 2. Tracing span and response logging, keyed by the request ID

use crate::api::headers::X_REQUEST_ID;
use axum::{
    body::Body,
    extract::Request,
    http::HeaderValue,
    middleware::{from_fn, Next},
    response::Response,
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::{DefaultOnFailure, DefaultOnResponse, TraceLayer};
use tracing::{info_span, Level, Span};
use uuid::Uuid;

/// Request ID middleware - ensures every request has a unique ID for tracing
///
/// A client-supplied `x-request-id` is kept when it is a valid UUID; otherwise
/// a fresh UUIDv7 replaces it. The ID is echoed on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::now_v7);

    let header_value = HeaderValue::from_str(&request_id.to_string())
        .unwrap_or_else(|_| HeaderValue::from_static("unknown"));

    request
        .headers_mut()
        .insert(X_REQUEST_ID, header_value.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, header_value);
    response
}

/// Span for one HTTP request, tagged with its request ID
pub fn make_request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown");

    info_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
    )
}

/// Builder for composing the API middleware stack
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiMiddlewareStack;

impl ApiMiddlewareStack {
    pub fn new() -> Self {
        Self
    }

    /// Apply the complete middleware stack to a router
    pub fn apply_to_router<S>(self, router: Router<S>) -> Router<S>
    where
        S: Clone + Send + Sync + 'static,
    {
        router.layer(
            ServiceBuilder::new()
                .layer(from_fn(request_id_middleware))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(make_request_span)
                        .on_response(DefaultOnResponse::new().level(Level::INFO))
                        .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
                ),
        )
    }
}
