//! Feed Use Cases
//!
//! [`ZnsClient`] lists and searches domains through a naming provider and
//! maps each record to a [`FeedItem`]. Metadata URLs are derived locally;
//! list operations never fetch documents, so a feed of N domains costs one
//! provider round-trip.

use std::sync::Arc;

use kernel::DomainId;
use platform::http::HttpFetcher;

use crate::application::config::ZnsConfig;
use crate::application::metadata_service::MetadataService;
use crate::domain::diagnostics::{DiagnosticSink, TracingDiagnostics};
use crate::domain::entities::{DomainRecord, FeedItem};
use crate::domain::provider::NamingProvider;
use crate::domain::resolver::DomainResolver;
use crate::error::{ZnsError, ZnsResult};

const RESOLVE_ID_DEPRECATION: &str = "resolve_id_from_name is deprecated and will be removed in a future version. Please use DomainResolver instead.";

/// Feed assembler
pub struct ZnsClient<P, F, D = TracingDiagnostics>
where
    P: NamingProvider,
    F: HttpFetcher,
    D: DiagnosticSink,
{
    provider: Arc<P>,
    metadata: MetadataService<F>,
    resolver: DomainResolver,
    diagnostics: Arc<D>,
    config: Arc<ZnsConfig>,
}

impl<P, F> ZnsClient<P, F, TracingDiagnostics>
where
    P: NamingProvider,
    F: HttpFetcher,
{
    pub fn new(provider: Arc<P>, fetcher: Arc<F>, config: Arc<ZnsConfig>) -> Self {
        let metadata = MetadataService::new(fetcher, config.ipfs_gateway.clone());

        Self {
            provider,
            metadata,
            resolver: DomainResolver::new(config.root_domain_id),
            diagnostics: Arc::new(TracingDiagnostics),
            config,
        }
    }
}

impl<P, F, D> ZnsClient<P, F, D>
where
    P: NamingProvider,
    F: HttpFetcher,
    D: DiagnosticSink,
{
    /// Replace the diagnostic sink
    pub fn with_diagnostics<D2>(self, diagnostics: Arc<D2>) -> ZnsClient<P, F, D2>
    where
        D2: DiagnosticSink,
    {
        ZnsClient {
            provider: self.provider,
            metadata: self.metadata,
            resolver: self.resolver,
            diagnostics,
            config: self.config,
        }
    }

    pub fn config(&self) -> &ZnsConfig {
        &self.config
    }

    pub fn resolver(&self) -> &DomainResolver {
        &self.resolver
    }

    pub fn metadata(&self) -> &MetadataService<F> {
        &self.metadata
    }

    /// Subdomains of `id` (the root when `None`) in provider order
    pub async fn get_feed(&self, id: Option<&DomainId>) -> ZnsResult<Vec<FeedItem>> {
        let id = id.copied().unwrap_or(self.config.root_domain_id);

        let records = self
            .provider
            .list_subdomains(&id)
            .await
            .inspect_err(ZnsError::log)?;

        tracing::debug!(domain_id = %id, count = records.len(), "Listed subdomains");

        Ok(records.iter().map(|r| self.map_record(r)).collect())
    }

    /// Single domain as a feed item
    pub async fn get_feed_item(&self, id: &DomainId) -> ZnsResult<FeedItem> {
        let record = self
            .provider
            .get_by_id(id)
            .await
            .inspect_err(ZnsError::log)?
            .ok_or(ZnsError::DomainNotFound(*id))?;

        Ok(self.map_record(&record))
    }

    /// Domains matching `pattern` in provider order
    pub async fn search(&self, pattern: &str) -> ZnsResult<Vec<FeedItem>> {
        let records = self
            .provider
            .find_by_name(pattern)
            .await
            .inspect_err(ZnsError::log)?;

        tracing::debug!(pattern = %pattern, count = records.len(), "Searched domains");

        Ok(records.iter().map(|r| self.map_record(r)).collect())
    }

    /// Fill the item's empty fields from its metadata document
    ///
    /// Leaves the item unchanged when it has no metadata URL or the
    /// document is unavailable.
    pub async fn enrich(&self, item: FeedItem) -> FeedItem {
        let Some(url) = item.metadata_url.clone() else {
            return item;
        };

        match self.metadata.load(&url).await {
            Some(metadata) => item.merge_metadata(metadata),
            None => item,
        }
    }

    /// [`get_feed_item`](Self::get_feed_item) followed by [`enrich`](Self::enrich)
    pub async fn get_feed_item_with_metadata(&self, id: &DomainId) -> ZnsResult<FeedItem> {
        let item = self.get_feed_item(id).await?;
        Ok(self.enrich(item).await)
    }

    /// Identifier of `name` under the configured root
    #[deprecated(note = "use DomainResolver::id_from_name")]
    pub fn resolve_id_from_name(&self, name: Option<&str>) -> DomainId {
        self.diagnostics.warn(RESOLVE_ID_DEPRECATION);
        self.resolver.id_from_name(name)
    }

    /// Map a provider record to a feed item
    pub fn map_record(&self, record: &DomainRecord) -> FeedItem {
        let metadata_uri = record.metadata_uri.as_deref();

        FeedItem {
            id: record.id,
            title: record.display_title().map(str::to_string),
            description: None,
            zns_route: record.name.clone(),
            metadata_url: metadata_uri.map(|uri| self.metadata.normalize_url(uri)),
            ipfs_content_id: metadata_uri
                .and_then(|uri| self.metadata.extract_ipfs_content_id(uri))
                .map(str::to_string),
            image_url: None,
            animation_url: None,
            attributes: None,
            owner: record.owner.clone(),
            minter: record.minter.clone(),
            contract: record.contract.clone(),
        }
    }
}
