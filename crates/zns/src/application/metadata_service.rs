//! Metadata Service
//!
//! Loads metadata documents over HTTP and normalizes them. Loading is
//! fail-soft: a document that cannot be fetched is reported as `None` so
//! that one missing document never fails an aggregate listing.

use std::sync::Arc;

use futures::future::join_all;
use platform::http::HttpFetcher;
use serde_json::Value;

use crate::domain::gateway::IpfsGateway;
use crate::domain::metadata::{NormalizedMetadata, is_blank_document};

/// Metadata loader and normalizer
pub struct MetadataService<F>
where
    F: HttpFetcher,
{
    fetcher: Arc<F>,
    gateway: IpfsGateway,
}

impl<F> MetadataService<F>
where
    F: HttpFetcher,
{
    pub fn new(fetcher: Arc<F>, gateway: IpfsGateway) -> Self {
        Self { fetcher, gateway }
    }

    pub fn gateway(&self) -> &IpfsGateway {
        &self.gateway
    }

    pub fn extract_ipfs_content_id<'a>(&self, url: &'a str) -> Option<&'a str> {
        self.gateway.extract_ipfs_content_id(url)
    }

    pub fn normalize_url(&self, url: &str) -> String {
        self.gateway.normalize_url(url)
    }

    pub fn normalize(&self, doc: &Value) -> NormalizedMetadata {
        NormalizedMetadata::from_document(doc, &self.gateway)
    }

    /// Fetch and normalize the document at `url`
    ///
    /// `ipfs://` URIs are fetched through the gateway. Transport failures,
    /// non-success responses and blank bodies all yield `None`.
    pub async fn load(&self, url: &str) -> Option<NormalizedMetadata> {
        let url = self.normalize_url(url);

        let response = match self.fetcher.get(&url).await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "Metadata unavailable");
                return None;
            }
        };

        if is_blank_document(&response.body) {
            tracing::debug!(url = %url, "Metadata document is empty");
            return None;
        }

        Some(self.normalize(&response.body))
    }

    /// Load several documents concurrently, results in input order
    pub async fn load_many<S>(&self, urls: &[S]) -> Vec<Option<NormalizedMetadata>>
    where
        S: AsRef<str>,
    {
        join_all(urls.iter().map(|url| self.load(url.as_ref()))).await
    }
}

impl<F> Clone for MetadataService<F>
where
    F: HttpFetcher,
{
    fn clone(&self) -> Self {
        Self {
            fetcher: Arc::clone(&self.fetcher),
            gateway: self.gateway.clone(),
        }
    }
}
