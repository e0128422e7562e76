//! Naming Provider Trait
//!
//! Interface to the external naming system. Implementations report their
//! failures as [`ZnsError::Provider`](crate::error::ZnsError::Provider).

use kernel::DomainId;

use crate::domain::entities::DomainRecord;
use crate::error::ZnsResult;

/// Naming provider trait
#[trait_variant::make(NamingProvider: Send)]
pub trait LocalNamingProvider {
    /// Direct subdomains of `id`, most recent first
    async fn list_subdomains(&self, id: &DomainId) -> ZnsResult<Vec<DomainRecord>>;

    /// Record for `id`, if the domain exists
    async fn get_by_id(&self, id: &DomainId) -> ZnsResult<Option<DomainRecord>>;

    /// Domains whose name matches `pattern`
    async fn find_by_name(&self, pattern: &str) -> ZnsResult<Vec<DomainRecord>>;
}
