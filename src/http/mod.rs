//! HTTP transport layer.
//!
//! Gateways talk to the network only through the [`Transport`] trait, so the
//! reqwest-backed [`HttpTransport`] can be swapped for a scripted one in tests.

#[cfg(feature = "http")]
pub mod client;

#[cfg(feature = "http")]
pub use client::HttpTransport;

use crate::error::HttpError;
use async_trait::async_trait;

/// Raw response: status code plus the body as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `200 OK` with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// A single-shot HTTP GET. No retries, no caching.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<HttpResponse, HttpError>;
}
