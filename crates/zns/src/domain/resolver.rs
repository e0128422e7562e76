//! Domain ID Resolver
//!
//! Derives the identifier of a dotted domain name by folding its labels,
//! left to right, into a hash chain seeded with the root identifier:
//!
//! ```text
//! id("a.b") = keccak(keccak(root ++ keccak("a")) ++ keccak("b"))
//! ```

use kernel::DomainId;
use platform::crypto::{hash_pair, keccak256};

/// Resolves domain names to identifiers under one root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DomainResolver {
    root_domain_id: DomainId,
}

impl DomainResolver {
    pub fn new(root_domain_id: DomainId) -> Self {
        Self { root_domain_id }
    }

    pub fn root_domain_id(&self) -> DomainId {
        self.root_domain_id
    }

    /// Identifier of `name`
    ///
    /// `None` and `""` both denote the root itself. Labels are hashed
    /// byte-for-byte (case-sensitive) and empty labels such as the middle
    /// of `"a..b"` are kept and hashed as the empty string.
    ///
    /// ```
    /// use kernel::DomainId;
    /// use zns::domain::resolver::DomainResolver;
    ///
    /// let resolver = DomainResolver::new(DomainId::zero());
    /// assert_eq!(resolver.id_from_name(None), DomainId::zero());
    /// assert_eq!(
    ///     resolver.id_from_name(Some("tacos")).to_string(),
    ///     "0x5f594b54ed4a23525fcffd681a5a5cf0daf33105d9a2e9ab0ceeae4cc54dceea"
    /// );
    /// ```
    pub fn id_from_name(&self, name: Option<&str>) -> DomainId {
        match name {
            None | Some("") => self.root_domain_id,
            Some(name) => name
                .split('.')
                .fold(self.root_domain_id, |parent, label| child_id(&parent, label)),
        }
    }
}

/// Keccak-256 of the label's UTF-8 bytes
pub fn label_hash(label: &str) -> [u8; 32] {
    keccak256(label.as_bytes())
}

/// Identifier of `label` directly below `parent`
pub fn child_id(parent: &DomainId, label: &str) -> DomainId {
    DomainId::from_bytes(hash_pair(parent.as_bytes(), &label_hash(label)))
}
