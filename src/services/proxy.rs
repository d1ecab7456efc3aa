//! Reverse-proxy client forwarding guest-pass API paths from the admin origin

use axum::body::Bytes;
use axum::http::{HeaderMap, Method};

use crate::error::{AppError, AppResult};

/// Forwarded response: upstream status, content type, raw body
pub struct ProxiedResponse {
    pub status: u16,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Clone)]
pub struct ProxyService {
    client: reqwest::Client,
    base_url: String,
}

impl ProxyService {
    pub fn new(guestpass_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: guestpass_url.trim_end_matches('/').to_string(),
        }
    }

    /// Forward one request to the guest-pass origin, relaying method, query
    /// string, JSON body, and the Authorization header
    pub async fn forward(
        &self,
        method: Method,
        path_and_query: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> AppResult<ProxiedResponse> {
        let url = format!("{}{}", self.base_url, path_and_query);

        let method = reqwest::Method::from_bytes(method.as_str().as_bytes())
            .map_err(|_| AppError::BadRequest("Unsupported method".to_string()))?;

        let mut request = self.client.request(method, &url);

        if let Some(auth) = headers.get(axum::http::header::AUTHORIZATION) {
            if let Ok(value) = auth.to_str() {
                request = request.header(reqwest::header::AUTHORIZATION, value);
            }
        }
        if let Some(content_type) = headers.get(axum::http::header::CONTENT_TYPE) {
            if let Ok(value) = content_type.to_str() {
                request = request.header(reqwest::header::CONTENT_TYPE, value);
            }
        }

        if !body.is_empty() {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("Guest-pass service unreachable: {}", e)))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string);
        let body = response
            .bytes()
            .await
            .map_err(|e| AppError::Upstream(format!("Failed to read upstream body: {}", e)))?;

        Ok(ProxiedResponse {
            status,
            content_type,
            body,
        })
    }
}
