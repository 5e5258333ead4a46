//! Raw output of a full object read.

use bytes::Bytes;
use doclave_core::Metadata;

/// Body and metadata returned together by a full read.
#[derive(Debug, Clone)]
pub struct ReadOutput {
    /// Object body exactly as the provider returned it.
    pub body: Bytes,
    /// Metadata stored alongside the body.
    pub metadata: Metadata,
}

impl ReadOutput {
    /// Creates a read output from a body and its metadata.
    pub fn new(body: impl Into<Bytes>, metadata: Metadata) -> Self {
        Self {
            body: body.into(),
            metadata,
        }
    }
}
