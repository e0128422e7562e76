//! ZNS Client Library
//!
//! Read-only client for a hierarchical on-chain naming system.
//!
//! Clean Architecture structure:
//! - `domain/` - Name hashing, metadata normalization, entities, collaborator traits
//! - `application/` - Configuration, metadata loading, feed use cases
//! - `infra/` - Collaborator implementations (in-memory naming provider)
//!
//! ## Behaviour
//! - Domain ids are a Keccak-256 hash chain over the dotted labels, seeded
//!   with the configured root id
//! - `ipfs://` URIs are rewritten to the configured HTTP gateway
//! - Provider failures propagate to the caller; metadata fetch failures never do

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::ZnsConfig;
pub use application::feed::ZnsClient;
pub use application::metadata_service::MetadataService;
pub use domain::{
    DiagnosticSink, DomainRecord, DomainResolver, FeedItem, IpfsGateway, NamingProvider,
    NormalizedMetadata, TracingDiagnostics,
};
pub use error::{ZnsError, ZnsResult};
pub use infra::memory::InMemoryNamingProvider;

// Re-export kernel types shared across crates
pub use kernel::{AppError, AppResult, DomainId, ErrorKind};

#[cfg(test)]
mod tests;
