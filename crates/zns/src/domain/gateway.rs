//! IPFS Gateway
//!
//! Translates content-addressed `ipfs://` URIs into fetchable HTTP URLs.

/// Default public gateway
pub const DEFAULT_IPFS_GATEWAY: &str = "https://fleek.ipfs.io/ipfs/";

const IPFS_SCHEME: &str = "ipfs://";

/// Characters a content id may not contain
const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// HTTP gateway for IPFS content
///
/// The base URL always ends with exactly one `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpfsGateway {
    base_url: String,
}

impl IpfsGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Content id of an `ipfs://<contentId>` URI
    ///
    /// The scheme is matched case-sensitively. Any other shape, an empty
    /// content id, or a content id containing a line terminator yields `None`.
    pub fn extract_ipfs_content_id<'a>(&self, url: &'a str) -> Option<&'a str> {
        url.strip_prefix(IPFS_SCHEME)
            .filter(|id| !id.is_empty() && !id.contains(LINE_TERMINATORS))
    }

    /// Gateway URL for IPFS URIs, anything else unchanged
    ///
    /// ```
    /// use zns::domain::gateway::IpfsGateway;
    ///
    /// let gateway = IpfsGateway::new("http://h");
    /// assert_eq!(gateway.normalize_url("ipfs://CID"), "http://h/CID");
    /// assert_eq!(gateway.normalize_url("https://x.com/a"), "https://x.com/a");
    /// ```
    pub fn normalize_url(&self, url: &str) -> String {
        match self.extract_ipfs_content_id(url) {
            Some(content_id) => format!("{}{}", self.base_url, content_id),
            None => url.to_string(),
        }
    }
}

impl Default for IpfsGateway {
    fn default() -> Self {
        Self::new(DEFAULT_IPFS_GATEWAY)
    }
}
