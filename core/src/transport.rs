//! Transport port: executes an `HttpRequest` and returns an `HttpResponse`.
//!
//! Non-2xx statuses come back as data so that `HeroClient::parse_*` decides
//! what they mean. Only failures that produce no response at all surface as
//! `ApiError::Transport`.

use std::future::Future;
use std::time::Duration;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Executes HTTP round-trips for the data-access layer.
pub trait Transport: Send + Sync {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send;
}

/// `Transport` backed by an async `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a transport whose requests give up after `timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if the underlying client cannot be
    /// constructed (e.g. the TLS backend fails to initialise).
    pub fn with_timeout(timeout: Duration) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Ok(Self { client })
    }
}

impl Transport for ReqwestTransport {
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> + Send {
        let HttpRequest {
            method,
            path,
            headers,
            body,
        } = request;

        let method = match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut builder = self.client.request(method, path.as_str());
        for (name, value) in &headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = body {
            builder = builder.body(body);
        }

        async move {
            let response = builder
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response
                .text()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }
}
