//! Client seam for the injected object-store collaborator.

mod read_output;

pub use read_output::ReadOutput;

use bytes::Bytes;
use doclave_core::{BoxedError, Metadata};

/// An already-configured remote object-store client.
///
/// Implementations are supplied by the caller at construction time; the
/// wrapper never builds or configures one itself. Credentials, timeouts,
/// retries, pooling, and pagination all live behind this seam.
///
/// Failure reporting is provider-defined: errors returned here are surfaced
/// to callers verbatim, without translation.
#[async_trait::async_trait]
pub trait StoreClient: Send + Sync {
    /// Provider write response, returned by
    /// [`JsonStore::put`](crate::store::JsonStore::put) without shaping.
    type WriteOutput: Send;

    /// Writes a body and its metadata under `bucket`/`key`.
    ///
    /// The metadata mapping replaces whatever a previous write attached.
    async fn write(
        &self,
        bucket: &str,
        key: &str,
        body: Bytes,
        metadata: Metadata,
    ) -> Result<Self::WriteOutput, BoxedError>;

    /// Reads only the metadata attached to `bucket`/`key`, without
    /// transferring the body.
    async fn read_metadata(&self, bucket: &str, key: &str) -> Result<Metadata, BoxedError>;

    /// Reads the body and metadata stored under `bucket`/`key`.
    async fn read(&self, bucket: &str, key: &str) -> Result<ReadOutput, BoxedError>;
}
