//! Common error type definitions.

use strum::{AsRefStr, IntoStaticStr};

/// Type alias for boxed dynamic errors that can be sent across threads.
///
/// Provider failures that the wrappers surface verbatim are carried behind
/// this alias, keeping the original error reachable through `source()` or
/// downcasting.
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// Coarse classification shared by every error the wrappers surface.
///
/// Each wrapper crate exposes `class()` on its own error enum mapping into
/// this taxonomy, so callers can branch on the category without matching
/// crate-specific variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorClass {
    /// A required input parameter was absent; raised before any client call.
    InvalidArgument,
    /// A stored body could not be interpreted as UTF-8 JSON.
    Decode,
    /// The analysis provider signaled rate limiting.
    Throttling,
    /// The analysis provider rejected the document itself.
    BadDocument,
    /// Untranslated provider failure, surfaced verbatim.
    Provider,
}

impl ErrorClass {
    /// Whether a retry can reasonably succeed without caller-side changes.
    ///
    /// The wrappers implement no retry policy themselves; this only informs
    /// callers that do. Untranslated provider failures report `false` and
    /// leave the decision to whoever can inspect the original error.
    pub fn is_retryable(self) -> bool {
        matches!(self, ErrorClass::Throttling)
    }

    /// Returns the class as a static string (snake_case).
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_class_string_forms() {
        assert_eq!(ErrorClass::InvalidArgument.as_str(), "invalid_argument");
        assert_eq!(ErrorClass::Decode.as_str(), "decode");
        assert_eq!(ErrorClass::BadDocument.as_ref(), "bad_document");
    }

    #[test]
    fn test_only_throttling_is_retryable() {
        assert!(ErrorClass::Throttling.is_retryable());
        assert!(!ErrorClass::InvalidArgument.is_retryable());
        assert!(!ErrorClass::Decode.is_retryable());
        assert!(!ErrorClass::BadDocument.is_retryable());
        assert!(!ErrorClass::Provider.is_retryable());
    }
}
