//! Reverse-proxy handler forwarding guest-pass paths from the admin origin
//!
//! Mirrors the dashboard's rewrite table: login, logout, auth, visits,
//! executives, and health are served by the guest-pass service; everything
//! else stays local.

use axum::{
    body::{self, Body},
    extract::{OriginalUri, Request, State},
    http::{header, StatusCode},
    response::Response,
};

use crate::error::{AppError, AppResult};

/// Largest request body the proxy will relay
const MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

/// Forward the request to the guest-pass origin and relay the response
pub async fn forward(
    State(state): State<crate::AppState>,
    OriginalUri(uri): OriginalUri,
    request: Request,
) -> AppResult<Response> {
    let method = request.method().clone();
    let headers = request.headers().clone();
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());

    let body_bytes = body::to_bytes(request.into_body(), MAX_BODY_BYTES)
        .await
        .map_err(|_| AppError::BadRequest("Request body too large".to_string()))?;

    let proxied = state
        .services
        .proxy
        .forward(method, &path_and_query, &headers, body_bytes)
        .await?;

    let status = StatusCode::from_u16(proxied.status).unwrap_or(StatusCode::BAD_GATEWAY);
    let mut builder = Response::builder().status(status);
    if let Some(content_type) = proxied.content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }

    builder
        .body(Body::from(proxied.body))
        .map_err(|e| AppError::Internal(format!("Failed to build proxied response: {}", e)))
}
