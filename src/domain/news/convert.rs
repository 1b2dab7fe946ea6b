//! Conversion: `RawArticle` → `NewsItem`.

use super::wire::RawArticle;
use super::NewsItem;
use crate::error::GatewayError;

impl TryFrom<RawArticle> for NewsItem {
    type Error = GatewayError;

    fn try_from(a: RawArticle) -> Result<Self, Self::Error> {
        let title = a.title.trim().to_string();
        if title.is_empty() {
            return Err(GatewayError::Schema(format!("article {} has no title", a.id)));
        }
        if a.url.trim().is_empty() {
            return Err(GatewayError::Schema(format!("article {} has no url", a.id)));
        }

        let source = a
            .source_info
            .and_then(|info| info.name)
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(a.source);

        let categories = a
            .categories
            .map(|c| {
                c.split('|')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            id: a.id,
            title,
            source,
            url: a.url,
            published_at: a.published_on,
            image_url: a.imageurl.filter(|u| !u.is_empty()),
            body: a.body.filter(|b| !b.is_empty()),
            categories,
        })
    }
}
