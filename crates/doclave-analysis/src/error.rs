//! Error types for the document-analysis wrapper.

use doclave_core::ErrorClass;

use crate::types::ProviderError;

/// Result type for analysis operations in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for document-analysis wrapper operations.
///
/// Exactly two sets of provider codes are translated into local categories
/// ([`Error::Throttling`] and [`Error::BadDocument`]); every other provider
/// failure is surfaced verbatim through [`Error::Provider`], never swallowed.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// A required argument was absent.
    ///
    /// Raised before any client call is attempted, never retried.
    #[error("{0}")]
    InvalidArgument(String),

    /// The provider signaled rate limiting.
    ///
    /// The wrapper does not retry or back off; callers wanting resilience
    /// wrap the call with their own policy.
    #[error("analysis request was throttled by the provider ({code})")]
    Throttling {
        /// Provider code that triggered the translation.
        code: String,
    },

    /// The provider rejected the document as unsupported, too large, or
    /// malformed.
    #[error("document rejected by the analysis provider: {code}")]
    BadDocument {
        /// Provider code that triggered the translation.
        code: String,
    },

    /// Any other provider failure, surfaced verbatim with the original
    /// information intact.
    #[error(transparent)]
    Provider(ProviderError),
}

impl Error {
    /// Coarse class of this error in the shared taxonomy.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::InvalidArgument(_) => ErrorClass::InvalidArgument,
            Error::Throttling { .. } => ErrorClass::Throttling,
            Error::BadDocument { .. } => ErrorClass::BadDocument,
            Error::Provider(_) => ErrorClass::Provider,
        }
    }

    /// Returns whether this error indicates a missing required argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns whether the provider signaled rate limiting.
    pub fn is_throttling(&self) -> bool {
        matches!(self, Error::Throttling { .. })
    }

    /// Returns whether the provider rejected the document itself.
    pub fn is_bad_document(&self) -> bool {
        matches!(self, Error::BadDocument { .. })
    }

    /// Returns whether this error should trigger an automatic retry.
    pub fn is_retryable(&self) -> bool {
        self.class().is_retryable()
    }
}
