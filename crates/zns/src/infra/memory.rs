//! In-memory Naming Provider
//!
//! Holds a fixed set of records, built up front and read-only afterwards.
//! Useful for tests, demos and offline fixtures.

use kernel::DomainId;

use crate::domain::entities::DomainRecord;
use crate::domain::provider::NamingProvider;
use crate::domain::resolver::DomainResolver;
use crate::error::ZnsResult;

#[derive(Debug, Clone)]
struct Entry {
    parent: DomainId,
    record: DomainRecord,
}

/// Naming provider over a fixed list of records
///
/// Subdomain listings return the most recently added record first.
#[derive(Debug, Clone, Default)]
pub struct InMemoryNamingProvider {
    entries: Vec<Entry>,
}

impl InMemoryNamingProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `record` as a direct subdomain of `parent`
    pub fn with_record(mut self, parent: DomainId, record: DomainRecord) -> Self {
        self.entries.push(Entry { parent, record });
        self
    }

    /// Add `record` below the parent implied by its dotted name
    pub fn with_child_record(self, resolver: &DomainResolver, record: DomainRecord) -> Self {
        let parent_name = record.name.rsplit_once('.').map(|(parent, _)| parent);
        let parent = resolver.id_from_name(parent_name);
        self.with_record(parent, record)
    }

    /// Add a bare record for the dotted `name`, id derived with `resolver`
    pub fn with_name(self, resolver: &DomainResolver, name: &str) -> Self {
        let record = DomainRecord::new(resolver.id_from_name(Some(name)), name);
        self.with_child_record(resolver, record)
    }

    /// Provider holding `records`, each below the parent implied by its name
    pub fn from_records(
        resolver: &DomainResolver,
        records: impl IntoIterator<Item = DomainRecord>,
    ) -> Self {
        records
            .into_iter()
            .fold(Self::new(), |provider, record| {
                provider.with_child_record(resolver, record)
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl NamingProvider for InMemoryNamingProvider {
    async fn list_subdomains(&self, id: &DomainId) -> ZnsResult<Vec<DomainRecord>> {
        Ok(self
            .entries
            .iter()
            .rev()
            .filter(|entry| entry.parent == *id)
            .map(|entry| entry.record.clone())
            .collect())
    }

    async fn get_by_id(&self, id: &DomainId) -> ZnsResult<Option<DomainRecord>> {
        Ok(self
            .entries
            .iter()
            .find(|entry| entry.record.id == *id)
            .map(|entry| entry.record.clone()))
    }

    /// Case-insensitive substring match on the dotted name
    async fn find_by_name(&self, pattern: &str) -> ZnsResult<Vec<DomainRecord>> {
        let pattern = pattern.to_lowercase();
        Ok(self
            .entries
            .iter()
            .filter(|entry| entry.record.name.to_lowercase().contains(&pattern))
            .map(|entry| entry.record.clone())
            .collect())
    }
}
