//! Fetches the content document and applies it to a page.

use crate::content::ContentDocument;
use crate::render::apply_content;
use crate::transport::Transport;
use crate::types::{FetchError, FetchResult, CONTENT_ENDPOINT};
use crate::view::PageView;

/// Loads `/api/content` onto a page.
pub struct ContentLoader<T> {
    transport: T,
    endpoint: String,
}

impl<T: Transport> ContentLoader<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            endpoint: CONTENT_ENDPOINT.to_string(),
        }
    }

    /// Fetch and decode the content document without touching any page.
    pub async fn fetch(&self) -> FetchResult<ContentDocument> {
        let response = self.transport.get(&self.endpoint).await?;
        if !response.is_success() {
            return Err(FetchError::Status(response.status));
        }
        ContentDocument::parse(&response.body)
    }

    /// Fetch the content document and apply it to `page`.
    ///
    /// On failure the page is left as it was and the error is logged; the
    /// error is also returned so callers can report it if they wish.
    pub async fn load_content<V: PageView + ?Sized>(&self, page: &mut V) -> FetchResult<()> {
        match self.fetch().await {
            Ok(doc) => {
                apply_content(page, &doc);
                tracing::info!(endpoint = %self.endpoint, "content applied");
                Ok(())
            }
            Err(error) => {
                tracing::warn!(
                    endpoint = %self.endpoint,
                    %error,
                    "content load failed, keeping static content"
                );
                Err(error)
            }
        }
    }
}
