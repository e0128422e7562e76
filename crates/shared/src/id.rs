//! Domain Identifier
//!
//! Fixed-width (32 byte) identifier of a node in the naming hierarchy.
//! Rendered as `0x` followed by 64 lowercase hex characters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Byte length of a domain identifier
pub const DOMAIN_ID_LEN: usize = 32;

/// Error when parsing a [`DomainId`] from text
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainIdError {
    #[error("Domain id must start with 0x")]
    MissingPrefix,

    #[error("Domain id must be {expected} bytes (got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    #[error("Domain id is not valid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// 32-byte domain identifier
///
/// Usage:
/// ```
/// use kernel::id::DomainId;
///
/// let root = DomainId::zero();
/// assert_eq!(
///     root.to_string(),
///     "0x0000000000000000000000000000000000000000000000000000000000000000"
/// );
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct DomainId([u8; DOMAIN_ID_LEN]);

impl DomainId {
    /// The all-zero identifier (default root)
    pub const fn zero() -> Self {
        Self([0u8; DOMAIN_ID_LEN])
    }

    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; DOMAIN_ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a `0x`-prefixed hex string
    ///
    /// The prefix is lowercase; the digits may be either case.
    pub fn parse_hex(s: &str) -> Result<Self, DomainIdError> {
        let digits = s.strip_prefix("0x").ok_or(DomainIdError::MissingPrefix)?;

        let bytes = hex::decode(digits)?;
        let bytes: [u8; DOMAIN_ID_LEN] = bytes.as_slice().try_into().map_err(|_| {
            DomainIdError::InvalidLength {
                expected: DOMAIN_ID_LEN,
                actual: bytes.len(),
            }
        })?;

        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; DOMAIN_ID_LEN] {
        &self.0
    }

    /// Convert to bytes
    pub fn into_bytes(self) -> [u8; DOMAIN_ID_LEN] {
        self.0
    }

    /// Hex representation with `0x` prefix
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl fmt::Debug for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DomainId({})", self.to_hex())
    }
}

impl fmt::Display for DomainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for DomainId {
    type Err = DomainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_hex(s)
    }
}

impl From<[u8; DOMAIN_ID_LEN]> for DomainId {
    fn from(bytes: [u8; DOMAIN_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<DomainId> for [u8; DOMAIN_ID_LEN] {
    fn from(id: DomainId) -> Self {
        id.0
    }
}

impl AsRef<[u8]> for DomainId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for DomainId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for DomainId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse_hex(&s).map_err(serde::de::Error::custom)
    }
}
