//! News gateway.

use super::wire::NewsResponse;
use super::NewsItem;
use crate::error::GatewayError;
use crate::http::Transport;

use std::sync::Arc;

/// Fetches the latest English-language news feed.
#[derive(Clone)]
pub struct NewsGateway {
    transport: Arc<dyn Transport>,
    base_url: String,
}

impl NewsGateway {
    pub fn new(transport: Arc<dyn Transport>, base_url: &str) -> Self {
        Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self) -> String {
        format!("{}/data/v2/news/?lang=EN", self.base_url)
    }

    pub async fn fetch(&self) -> Result<Vec<NewsItem>, GatewayError> {
        let resp = self.transport.get(&self.url()).await?;
        if resp.status != 200 {
            return Err(GatewayError::Status {
                status: resp.status,
                body: resp.body,
            });
        }

        let parsed: NewsResponse = serde_json::from_str(&resp.body)?;
        parsed
            .into_articles()
            .into_iter()
            .map(NewsItem::try_from)
            .collect()
    }
}
