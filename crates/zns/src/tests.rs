//! Scenario tests for the ZNS crate
//! Feed assembly end to end with plain test doubles for every collaborator.

#[cfg(test)]
mod support {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use kernel::DomainId;
    use platform::http::{FetchError, FetchResponse, HttpFetcher};
    use serde_json::Value;

    use crate::application::config::ZnsConfig;
    use crate::application::feed::ZnsClient;
    use crate::domain::diagnostics::DiagnosticSink;
    use crate::domain::entities::DomainRecord;
    use crate::domain::provider::NamingProvider;
    use crate::error::{ZnsError, ZnsResult};

    /// Provider returning a fixed list and recording its arguments
    #[derive(Default)]
    pub struct RecordingProvider {
        pub records: Vec<DomainRecord>,
        pub failure: Option<ZnsError>,
        pub listed_ids: Mutex<Vec<DomainId>>,
        pub patterns: Mutex<Vec<String>>,
    }

    impl RecordingProvider {
        pub fn with_records(records: Vec<DomainRecord>) -> Self {
            Self {
                records,
                ..Default::default()
            }
        }

        pub fn failing(err: ZnsError) -> Self {
            Self {
                failure: Some(err),
                ..Default::default()
            }
        }

        fn result<T>(&self, ok: T) -> ZnsResult<T> {
            match &self.failure {
                Some(err) => Err(err.clone()),
                None => Ok(ok),
            }
        }
    }

    impl NamingProvider for RecordingProvider {
        async fn list_subdomains(&self, id: &DomainId) -> ZnsResult<Vec<DomainRecord>> {
            self.listed_ids.lock().unwrap().push(*id);
            self.result(self.records.clone())
        }

        async fn get_by_id(&self, id: &DomainId) -> ZnsResult<Option<DomainRecord>> {
            self.result(self.records.iter().find(|r| r.id == *id).cloned())
        }

        async fn find_by_name(&self, pattern: &str) -> ZnsResult<Vec<DomainRecord>> {
            self.patterns.lock().unwrap().push(pattern.to_string());
            self.result(self.records.clone())
        }
    }

    /// Fetcher serving canned bodies and counting requests
    #[derive(Default)]
    pub struct FakeFetcher {
        pub bodies: HashMap<String, Value>,
        pub requested: Mutex<Vec<String>>,
    }

    impl FakeFetcher {
        pub fn with(mut self, url: &str, body: Value) -> Self {
            self.bodies.insert(url.to_string(), body);
            self
        }

        pub fn request_count(&self) -> usize {
            self.requested.lock().unwrap().len()
        }
    }

    impl HttpFetcher for FakeFetcher {
        async fn get(&self, url: &str) -> Result<FetchResponse, FetchError> {
            self.requested.lock().unwrap().push(url.to_string());
            self.bodies
                .get(url)
                .cloned()
                .map(FetchResponse::ok)
                .ok_or_else(|| FetchError::Transport(format!("no route to {}", url)))
        }
    }

    /// Diagnostic sink keeping every warning
    #[derive(Default)]
    pub struct RecordingSink {
        pub messages: Mutex<Vec<String>>,
    }

    impl DiagnosticSink for RecordingSink {
        fn warn(&self, message: &str) {
            self.messages.lock().unwrap().push(message.to_string());
        }
    }

    pub fn id(byte: u8) -> DomainId {
        DomainId::from_bytes([byte; 32])
    }

    pub fn client(
        provider: RecordingProvider,
        fetcher: FakeFetcher,
    ) -> (
        ZnsClient<RecordingProvider, FakeFetcher>,
        Arc<RecordingProvider>,
        Arc<FakeFetcher>,
    ) {
        let provider = Arc::new(provider);
        let fetcher = Arc::new(fetcher);
        let config = Arc::new(ZnsConfig::default().with_ipfs_gateway_base("http://h/"));
        let client = ZnsClient::new(Arc::clone(&provider), Arc::clone(&fetcher), config);
        (client, provider, fetcher)
    }
}

#[cfg(test)]
mod feed_tests {
    use super::support::*;
    use crate::domain::entities::DomainRecord;
    use crate::error::ZnsError;
    use kernel::DomainId;

    #[tokio::test]
    async fn test_get_feed_passes_id_to_provider() {
        let (client, provider, _) = client(RecordingProvider::default(), FakeFetcher::default());

        client.get_feed(Some(&id(1))).await.unwrap();

        assert_eq!(*provider.listed_ids.lock().unwrap(), vec![id(1)]);
    }

    #[tokio::test]
    async fn test_get_feed_defaults_to_root() {
        let (client, provider, _) = client(RecordingProvider::default(), FakeFetcher::default());

        client.get_feed(None).await.unwrap();

        assert_eq!(*provider.listed_ids.lock().unwrap(), vec![DomainId::zero()]);
    }

    #[tokio::test]
    async fn test_get_feed_preserves_provider_order() {
        let records = vec![
            DomainRecord::new(id(3), "the.third.domain.name"),
            DomainRecord::new(id(1), "the.first.domain.name"),
            DomainRecord::new(id(2), "the.second.domain.name"),
        ];
        let (client, _, _) = client(
            RecordingProvider::with_records(records.clone()),
            FakeFetcher::default(),
        );

        let items = client.get_feed(None).await.unwrap();

        assert_eq!(items.len(), records.len());
        for (item, record) in items.iter().zip(&records) {
            assert_eq!(item.id, record.id);
            assert_eq!(item.zns_route, record.name);
        }
    }

    #[tokio::test]
    async fn test_feed_item_resolves_ipfs_metadata_url() {
        let records = vec![
            DomainRecord::new(id(1), "the.first.domain.name")
                .with_metadata_name("the-metadata-name")
                .with_metadata_uri("ipfs://CID"),
        ];
        let (client, _, fetcher) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let items = client.get_feed(Some(&id(9))).await.unwrap();

        assert_eq!(items[0].metadata_url.as_deref(), Some("http://h/CID"));
        assert_eq!(items[0].ipfs_content_id.as_deref(), Some("CID"));
        assert_eq!(items[0].title.as_deref(), Some("the-metadata-name"));
        assert_eq!(items[0].zns_route, "the.first.domain.name");
        // list path never fetches documents
        assert_eq!(fetcher.request_count(), 0);
    }

    #[tokio::test]
    async fn test_feed_item_keeps_http_metadata_url() {
        let records = vec![
            DomainRecord::new(id(1), "wilder.cats").with_metadata_uri("http://example.com/what-one"),
            DomainRecord::new(id(2), "wilder.dogs"),
        ];
        let (client, _, _) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let items = client.get_feed(None).await.unwrap();

        assert_eq!(
            items[0].metadata_url.as_deref(),
            Some("http://example.com/what-one")
        );
        assert!(items[0].ipfs_content_id.is_none());
        assert!(items[0].image_url.is_none());
        assert!(items[1].metadata_url.is_none());
        assert!(items[1].ipfs_content_id.is_none());
        assert_eq!(items[1].title.as_deref(), Some("wilder.dogs"));
    }

    #[tokio::test]
    async fn test_feed_item_passes_through_ownership() {
        let records = vec![
            DomainRecord::new(id(1), "wilder.cats")
                .with_owner("0xowner")
                .with_minter("0xminter")
                .with_contract("0xcontract"),
        ];
        let (client, _, _) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let item = client.get_feed(None).await.unwrap().remove(0);

        assert_eq!(item.owner.as_deref(), Some("0xowner"));
        assert_eq!(item.minter.as_deref(), Some("0xminter"));
        assert_eq!(item.contract.as_deref(), Some("0xcontract"));
    }

    #[tokio::test]
    async fn test_provider_failure_propagates_unchanged() {
        let failure = ZnsError::Provider("subgraph timed out".into());
        let (client, _, _) = client(
            RecordingProvider::failing(failure.clone()),
            FakeFetcher::default(),
        );

        assert_eq!(client.get_feed(None).await.unwrap_err(), failure);
        assert_eq!(client.search("cats").await.unwrap_err(), failure);
        assert_eq!(client.get_feed_item(&id(1)).await.unwrap_err(), failure);
    }

    #[tokio::test]
    async fn test_search_maps_records_in_order() {
        let records = vec![
            DomainRecord::new(id(1), "the.first.domain.name"),
            DomainRecord::new(id(2), "the.second.domain.name"),
            DomainRecord::new(id(3), "the.third.domain.name"),
        ];
        let (client, provider, _) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let routes: Vec<String> = client
            .search("anything")
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.zns_route)
            .collect();

        assert_eq!(
            routes,
            vec![
                "the.first.domain.name",
                "the.second.domain.name",
                "the.third.domain.name"
            ]
        );
        assert_eq!(*provider.patterns.lock().unwrap(), vec!["anything".to_string()]);
    }

    #[tokio::test]
    async fn test_get_feed_item() {
        let records = vec![
            DomainRecord::new(id(1), "wilder.cats"),
            DomainRecord::new(id(2), "wilder.dogs"),
        ];
        let (client, _, _) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let item = client.get_feed_item(&id(2)).await.unwrap();
        assert_eq!(item.id, id(2));
        assert_eq!(item.zns_route, "wilder.dogs");
    }

    #[tokio::test]
    async fn test_get_feed_item_not_found() {
        let (client, _, _) = client(RecordingProvider::default(), FakeFetcher::default());

        let result = client.get_feed_item(&id(7)).await;
        assert_eq!(result.unwrap_err(), ZnsError::DomainNotFound(id(7)));
    }
}

#[cfg(test)]
mod enrich_tests {
    use super::support::*;
    use crate::domain::entities::DomainRecord;
    use serde_json::json;

    #[tokio::test]
    async fn test_get_feed_item_with_metadata_merges_document() {
        let records = vec![
            DomainRecord::new(id(1), "wilder.cats")
                .with_metadata_name("Cats")
                .with_metadata_uri("ipfs://QmCats"),
        ];
        let fetcher = FakeFetcher::default().with(
            "http://h/QmCats",
            json!({
                "name": "Ignored Title",
                "description": "All the cats",
                "image": "ipfs://QmCatImage",
                "animation_url": "https://cdn.example/cats.mp4",
                "attributes": [{"trait_type": "Fur", "value": "Tabby"}]
            }),
        );
        let (client, _, _) = client(RecordingProvider::with_records(records), fetcher);

        let item = client.get_feed_item_with_metadata(&id(1)).await.unwrap();

        assert_eq!(item.title.as_deref(), Some("Cats"));
        assert_eq!(item.description.as_deref(), Some("All the cats"));
        assert_eq!(item.image_url.as_deref(), Some("http://h/QmCatImage"));
        assert_eq!(
            item.animation_url.as_deref(),
            Some("https://cdn.example/cats.mp4")
        );
        assert_eq!(
            item.attributes,
            Some(json!([{"trait_type": "Fur", "value": "Tabby"}]))
        );
        assert_eq!(item.zns_route, "wilder.cats");
    }

    #[tokio::test]
    async fn test_enrich_leaves_item_when_metadata_unavailable() {
        let records = vec![DomainRecord::new(id(1), "wilder.cats").with_metadata_uri("ipfs://QmGone")];
        let (client, _, fetcher) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let item = client.get_feed_item(&id(1)).await.unwrap();
        let enriched = client.enrich(item.clone()).await;

        assert_eq!(enriched, item);
        assert_eq!(fetcher.request_count(), 1);
    }

    #[tokio::test]
    async fn test_enrich_without_metadata_url_does_not_fetch() {
        let records = vec![DomainRecord::new(id(1), "wilder.cats")];
        let (client, _, fetcher) = client(
            RecordingProvider::with_records(records),
            FakeFetcher::default(),
        );

        let item = client.get_feed_item(&id(1)).await.unwrap();
        let enriched = client.enrich(item.clone()).await;

        assert_eq!(enriched, item);
        assert_eq!(fetcher.request_count(), 0);
    }

    #[tokio::test]
    async fn test_feed_keeps_count_when_documents_fail() {
        let records = vec![
            DomainRecord::new(id(1), "a").with_metadata_uri("ipfs://QmOk"),
            DomainRecord::new(id(2), "b").with_metadata_uri("ipfs://QmBroken"),
        ];
        let fetcher = FakeFetcher::default().with("http://h/QmOk", json!({"description": "ok"}));
        let (client, _, _) = client(RecordingProvider::with_records(records), fetcher);

        let mut enriched = Vec::new();
        for item in client.get_feed(None).await.unwrap() {
            enriched.push(client.enrich(item).await);
        }

        assert_eq!(enriched.len(), 2);
        assert_eq!(enriched[0].description.as_deref(), Some("ok"));
        assert!(enriched[1].description.is_none());
    }
}

#[cfg(test)]
mod resolver_tests {
    use super::support::*;
    use std::sync::Arc;

    #[test]
    fn test_client_resolver_matches_known_ids() {
        let (client, _, _) = client(RecordingProvider::default(), FakeFetcher::default());

        assert_eq!(
            client.resolver().id_from_name(Some("tacos")).to_string(),
            "0x5f594b54ed4a23525fcffd681a5a5cf0daf33105d9a2e9ab0ceeae4cc54dceea"
        );
        assert_eq!(
            client
                .resolver()
                .id_from_name(Some("tacos.are.the.best.fruit"))
                .to_string(),
            "0x28ce88e8ee1f700302155194a494101fd5d8163520cd08ba52a932a983391394"
        );
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_resolve_warns_on_every_call() {
        let sink = Arc::new(RecordingSink::default());
        let (client, _, _) = client(RecordingProvider::default(), FakeFetcher::default());
        let client = client.with_diagnostics(Arc::clone(&sink));

        let first = client.resolve_id_from_name(Some("tacos"));
        let second = client.resolve_id_from_name(Some("tacos"));

        assert_eq!(first, client.resolver().id_from_name(Some("tacos")));
        assert_eq!(first, second);

        let messages = sink.messages.lock().unwrap();
        assert_eq!(messages.len(), 2);
        assert!(messages[0].contains("deprecated"));
    }

    #[test]
    #[allow(deprecated)]
    fn test_deprecated_resolve_of_empty_name_is_root() {
        let sink = Arc::new(RecordingSink::default());
        let (client, _, _) = client(RecordingProvider::default(), FakeFetcher::default());
        let client = client.with_diagnostics(sink);

        assert_eq!(client.resolve_id_from_name(None), client.config().root_domain_id);
        assert_eq!(client.resolve_id_from_name(Some("")), client.config().root_domain_id);
    }
}

#[cfg(test)]
mod memory_provider_tests {
    use std::sync::Arc;

    use super::support::FakeFetcher;
    use crate::application::config::ZnsConfig;
    use crate::application::feed::ZnsClient;
    use crate::domain::resolver::DomainResolver;
    use crate::infra::memory::InMemoryNamingProvider;

    #[tokio::test]
    async fn test_feed_over_in_memory_provider() {
        let resolver = DomainResolver::default();
        let provider = InMemoryNamingProvider::new()
            .with_name(&resolver, "wilder")
            .with_name(&resolver, "wilder.cats")
            .with_name(&resolver, "wilder.dogs");

        let client = ZnsClient::new(
            Arc::new(provider),
            Arc::new(FakeFetcher::default()),
            Arc::new(ZnsConfig::default()),
        );

        let wilder = resolver.id_from_name(Some("wilder"));
        let routes: Vec<String> = client
            .get_feed(Some(&wilder))
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.zns_route)
            .collect();
        assert_eq!(routes, vec!["wilder.dogs", "wilder.cats"]);

        let top = client.get_feed(None).await.unwrap();
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].id, wilder);
    }
}
