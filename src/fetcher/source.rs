use std::sync::Arc;

use async_trait::async_trait;
use url::Url;

use crate::fetcher::{errors::FetchError, types::PageResponse};

/// Anything that can turn a URL into a decoded HTML page.
///
/// The search pipeline only talks to the catalog through this trait, so it
/// can be driven by [`HttpFetcher`](crate::fetcher::HttpFetcher) in
/// production and by canned pages in tests.
#[async_trait]
pub trait DocumentSource: Send + Sync + 'static {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError>;
}

#[async_trait]
impl<T: DocumentSource + ?Sized> DocumentSource for Arc<T> {
    async fn fetch(&self, url: &Url) -> Result<PageResponse, FetchError> {
        (**self).fetch(url).await
    }
}
