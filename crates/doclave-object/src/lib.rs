#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for store operations.
pub const TRACING_TARGET_STORE: &str = "doclave_object::store";

pub mod client;
pub mod store;

#[doc(hidden)]
pub mod prelude;

pub use doclave_core::{BoxedError, ErrorClass, Metadata};

// Re-export for convenience
pub use crate::client::{ReadOutput, StoreClient};
pub use crate::store::JsonStore;

/// Error type for object-store wrapper operations.
///
/// Store operations perform no provider error translation: whatever the
/// injected client reported is surfaced verbatim through [`Error::Store`].
/// Only local validation and body decoding produce wrapper-owned errors.
#[derive(Debug, thiserror::Error)]
#[must_use = "errors should be handled appropriately"]
pub enum Error {
    /// A required argument was absent.
    ///
    /// Raised before any client call is attempted, never retried.
    #[error("{0}")]
    InvalidArgument(String),

    /// The stored body was not valid UTF-8.
    ///
    /// Retrying will not fix malformed data.
    #[error("object body is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The payload could not be encoded to, or decoded from, JSON.
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Untranslated failure from the injected store client.
    #[error(transparent)]
    Store(BoxedError),
}

impl Error {
    fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }

    /// Coarse class of this error in the shared taxonomy.
    pub fn class(&self) -> ErrorClass {
        match self {
            Error::InvalidArgument(_) => ErrorClass::InvalidArgument,
            Error::Utf8(_) | Error::Json(_) => ErrorClass::Decode,
            Error::Store(_) => ErrorClass::Provider,
        }
    }

    /// Returns whether this error indicates a missing required argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Error::InvalidArgument(_))
    }

    /// Returns whether this error indicates an undecodable stored body.
    pub fn is_decode_error(&self) -> bool {
        matches!(self, Error::Utf8(_) | Error::Json(_))
    }

    /// Returns whether this error should trigger an automatic retry.
    ///
    /// Store failures report `false`: the original provider error is passed
    /// through untranslated, so only the caller can judge it.
    pub fn is_retryable(&self) -> bool {
        self.class().is_retryable()
    }
}

/// Specialized [`Result`] type for object-store wrapper operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;
