//! Domain Layer
//!
//! Contains entities, value objects, pure domain services and the traits
//! of external collaborators.

pub mod diagnostics;
pub mod entities;
pub mod gateway;
pub mod metadata;
pub mod provider;
pub mod resolver;

// Re-exports
pub use diagnostics::{DiagnosticSink, TracingDiagnostics};
pub use entities::{DomainRecord, FeedItem};
pub use gateway::IpfsGateway;
pub use metadata::NormalizedMetadata;
pub use provider::{LocalNamingProvider, NamingProvider};
pub use resolver::DomainResolver;
