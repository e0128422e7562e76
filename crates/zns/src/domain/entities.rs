//! Domain Entities
//!
//! [`DomainRecord`] is what a naming provider returns; [`FeedItem`] is what
//! callers receive.

use kernel::DomainId;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::metadata::NormalizedMetadata;

/// Raw domain record as returned by a naming provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainRecord {
    pub id: DomainId,
    /// Dotted name, e.g. `wilder.cats.tabby`
    pub name: String,
    #[serde(default)]
    pub metadata_uri: Option<String>,
    /// Name recorded in the metadata document, indexed by the provider
    #[serde(default)]
    pub metadata_name: Option<String>,
    #[serde(default)]
    pub owner: Option<String>,
    #[serde(default)]
    pub minter: Option<String>,
    #[serde(default)]
    pub contract: Option<String>,
}

impl DomainRecord {
    pub fn new(id: DomainId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            metadata_uri: None,
            metadata_name: None,
            owner: None,
            minter: None,
            contract: None,
        }
    }

    pub fn with_metadata_uri(mut self, uri: impl Into<String>) -> Self {
        self.metadata_uri = Some(uri.into());
        self
    }

    pub fn with_metadata_name(mut self, name: impl Into<String>) -> Self {
        self.metadata_name = Some(name.into());
        self
    }

    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    pub fn with_minter(mut self, minter: impl Into<String>) -> Self {
        self.minter = Some(minter.into());
        self
    }

    pub fn with_contract(mut self, contract: impl Into<String>) -> Self {
        self.contract = Some(contract.into());
        self
    }

    /// Provider-supplied title: metadata name, else the raw name
    pub fn display_title(&self) -> Option<&str> {
        [self.metadata_name.as_deref(), Some(self.name.as_str())]
            .into_iter()
            .flatten()
            .find(|title| !title.is_empty())
    }
}

/// Caller-facing representation of one domain
///
/// `id` and `zns_route` always equal the source record's id and name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: DomainId,
    pub title: Option<String>,
    pub description: Option<String>,
    pub zns_route: String,
    pub metadata_url: Option<String>,
    pub ipfs_content_id: Option<String>,
    pub image_url: Option<String>,
    pub animation_url: Option<String>,
    pub attributes: Option<Value>,
    pub owner: Option<String>,
    pub minter: Option<String>,
    pub contract: Option<String>,
}

impl FeedItem {
    /// Fill fields the provider left empty from loaded metadata
    ///
    /// Provider-supplied values are never overwritten.
    pub fn merge_metadata(mut self, metadata: NormalizedMetadata) -> Self {
        fill(&mut self.title, metadata.title);
        fill(&mut self.description, metadata.description);
        fill(&mut self.image_url, metadata.image_url);
        fill(&mut self.animation_url, metadata.animation_url);
        if self.attributes.is_none() {
            self.attributes = metadata.attributes;
        }
        self
    }
}

fn fill(slot: &mut Option<String>, value: Option<String>) {
    if slot.as_deref().is_none_or(str::is_empty) {
        if let Some(value) = value {
            *slot = Some(value);
        }
    }
}
