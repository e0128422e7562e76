//! Error Kind - Classification of errors
//!
//! Defines the [`ErrorKind`] enum shared by every ZNS crate.

use serde::Serialize;

/// Error classification
///
/// Each variant names who is responsible for the failure: the caller
/// (bad input, unknown domain), an external collaborator (naming provider,
/// HTTP transport), or this library itself.
///
/// ## Examples
/// ```rust
/// use kernel::error::kind::ErrorKind;
///
/// let kind = ErrorKind::NotFound;
/// assert_eq!(kind.as_str(), "Not Found");
/// assert!(kind.is_caller_error());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[non_exhaustive]
pub enum ErrorKind {
    /// Input failed local validation (malformed name or identifier)
    InvalidInput,
    /// Requested domain does not exist
    NotFound,
    /// Configuration value is missing or malformed
    Configuration,
    /// External naming provider failed
    Provider,
    /// HTTP transport failed (network, non-2xx, timeout)
    Transport,
    /// A document could not be decoded
    Decode,
    /// Internal invariant violated
    Internal,
}

impl ErrorKind {
    /// Human readable name
    ///
    /// ## Examples
    /// ```rust
    /// use kernel::error::kind::ErrorKind;
    /// assert_eq!(ErrorKind::InvalidInput.as_str(), "Invalid Input");
    /// ```
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Invalid Input",
            ErrorKind::NotFound => "Not Found",
            ErrorKind::Configuration => "Configuration",
            ErrorKind::Provider => "Provider",
            ErrorKind::Transport => "Transport",
            ErrorKind::Decode => "Decode",
            ErrorKind::Internal => "Internal",
        }
    }

    /// Whether the caller can fix the failure by changing its input
    #[inline]
    pub const fn is_caller_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidInput | ErrorKind::NotFound | ErrorKind::Configuration
        )
    }

    /// Whether the failure originated in an external collaborator
    ///
    /// These are the failures worth logging at error level.
    #[inline]
    pub const fn is_external(&self) -> bool {
        matches!(
            self,
            ErrorKind::Provider | ErrorKind::Transport | ErrorKind::Decode
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
