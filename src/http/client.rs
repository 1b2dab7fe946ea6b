//! reqwest-backed [`Transport`].

use super::{HttpResponse, Transport};
use crate::error::HttpError;

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Default transport: a pooled reqwest client.
///
/// Timeouts are the only deadline in the stack; gateways enforce none.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, HttpError> {
        let builder = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(10);

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );

        Ok(Self {
            client: builder.default_headers(headers).build()?,
        })
    }

    /// Wrap an already configured reqwest client.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError> {
        tracing::debug!(url, "GET");
        let resp = self.client.get(url).send().await?;
        let status = resp.status().as_u16();
        let body = resp.text().await?;
        Ok(HttpResponse { status, body })
    }
}
