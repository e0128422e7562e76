//! Application Configuration
//!
//! Configuration for the ZNS client. Immutable after construction; share it
//! behind an `Arc`.

use std::env;
use std::time::Duration;

use kernel::DomainId;

use crate::domain::gateway::{DEFAULT_IPFS_GATEWAY, IpfsGateway};
use crate::error::{ZnsError, ZnsResult};

/// Environment variable holding the root domain id
pub const ENV_ROOT_DOMAIN_ID: &str = "ZNS_ROOT_DOMAIN_ID";
/// Environment variable holding the IPFS gateway base URL
pub const ENV_IPFS_GATEWAY: &str = "ZNS_IPFS_GATEWAY";
/// Environment variable holding the HTTP timeout in seconds
pub const ENV_HTTP_TIMEOUT_SECS: &str = "ZNS_HTTP_TIMEOUT_SECS";

/// ZNS client configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZnsConfig {
    /// Seed of the name hash chain
    pub root_domain_id: DomainId,
    /// Gateway used to turn `ipfs://` URIs into HTTP URLs
    pub ipfs_gateway: IpfsGateway,
    /// Timeout applied by the HTTP fetcher
    pub request_timeout: Duration,
    /// User-Agent sent with metadata requests
    pub user_agent: String,
}

impl Default for ZnsConfig {
    fn default() -> Self {
        Self {
            root_domain_id: DomainId::zero(),
            ipfs_gateway: IpfsGateway::new(DEFAULT_IPFS_GATEWAY),
            request_timeout: Duration::from_secs(10),
            user_agent: concat!("zns-client/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl ZnsConfig {
    pub fn with_root_domain_id(self, root_domain_id: DomainId) -> Self {
        Self {
            root_domain_id,
            ..self
        }
    }

    pub fn with_ipfs_gateway_base(self, base_url: impl Into<String>) -> Self {
        Self {
            ipfs_gateway: IpfsGateway::new(base_url),
            ..self
        }
    }

    /// Set the fetch timeout; zero is rejected
    pub fn with_request_timeout(self, request_timeout: Duration) -> ZnsResult<Self> {
        if request_timeout.is_zero() {
            return Err(ZnsError::Config("Request timeout must be non-zero".to_string()));
        }

        Ok(Self {
            request_timeout,
            ..self
        })
    }

    /// Load from the process environment
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> ZnsResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> ZnsResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_ROOT_DOMAIN_ID) {
            let root = DomainId::parse_hex(raw.trim()).map_err(|e| {
                ZnsError::Config(format!("{} is not a domain id: {}", ENV_ROOT_DOMAIN_ID, e))
            })?;
            config = config.with_root_domain_id(root);
        }

        if let Some(raw) = lookup(ENV_IPFS_GATEWAY) {
            let base = raw.trim();
            if base.is_empty() {
                return Err(ZnsError::Config(format!("{} is empty", ENV_IPFS_GATEWAY)));
            }
            config = config.with_ipfs_gateway_base(base);
        }

        if let Some(raw) = lookup(ENV_HTTP_TIMEOUT_SECS) {
            let secs: u64 = raw.trim().parse().map_err(|e| {
                ZnsError::Config(format!("{} is not a number: {}", ENV_HTTP_TIMEOUT_SECS, e))
            })?;
            config = config
                .with_request_timeout(Duration::from_secs(secs))
                .map_err(|_| {
                    ZnsError::Config(format!("{} must be at least 1", ENV_HTTP_TIMEOUT_SECS))
                })?;
        }

        Ok(config)
    }
}
