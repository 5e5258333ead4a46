//! Bucket/key address of a remotely stored document.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The two-part address identifying an object in the remote store.
///
/// The wrappers never own the document; durability belongs to the store
/// behind the injected client. `DocumentRef` is only the address handed to
/// that client.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct DocumentRef {
    bucket: String,
    key: String,
}

impl DocumentRef {
    /// Creates a new address from a bucket and key.
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Bucket component.
    pub fn bucket(&self) -> &str {
        &self.bucket
    }

    /// Key component.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether both components are present.
    ///
    /// Blank components count as absent; wrapper validation rejects an
    /// incomplete address before any client call is made.
    pub fn is_complete(&self) -> bool {
        !self.bucket.trim().is_empty() && !self.key.trim().is_empty()
    }
}

impl fmt::Display for DocumentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.bucket, self.key)
    }
}
