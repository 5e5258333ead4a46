//! JSON document store over an injected object-store client.

use bytes::Bytes;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info, instrument};

use doclave_core::Metadata;

use crate::client::StoreClient;
use crate::{Error, Result, TRACING_TARGET_STORE};

/// Stores and retrieves JSON-serializable values under bucket/key addresses.
///
/// A thin pass-through over the injected [`StoreClient`]: arguments are
/// validated locally before any client call, bodies are (de)serialized as
/// JSON text, and client failures are surfaced verbatim.
#[derive(Debug, Clone)]
pub struct JsonStore<C> {
    client: C,
}

impl<C> JsonStore<C> {
    /// Creates a store over an already-configured client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns a reference to the injected client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

// Blank strings count as absent.
fn is_absent(value: &str) -> bool {
    value.trim().is_empty()
}

impl<C: StoreClient> JsonStore<C> {
    /// Serializes `value` to a JSON body and writes it with `metadata` under
    /// `bucket`/`key`.
    ///
    /// The metadata mapping may be empty; it replaces whatever a previous
    /// write attached. Returns the provider response unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `bucket` or `key` is absent (checked
    /// before the client is touched), [`Error::Json`] if `value` cannot be
    /// serialized, [`Error::Store`] for any client failure.
    #[instrument(skip(self, value, metadata), target = TRACING_TARGET_STORE, fields(bucket = %bucket, key = %key))]
    pub async fn put<T: Serialize>(
        &self,
        bucket: &str,
        key: &str,
        value: &T,
        metadata: Metadata,
    ) -> Result<C::WriteOutput> {
        if is_absent(bucket) || is_absent(key) {
            return Err(Error::invalid_argument(
                "bucket, key, object and metadata are required",
            ));
        }

        let body = serde_json::to_vec(value)?;
        let size = body.len();

        debug!(
            target: TRACING_TARGET_STORE,
            bucket = %bucket,
            key = %key,
            size = size,
            entries = metadata.len(),
            "writing object"
        );

        match self.client.write(bucket, key, Bytes::from(body), metadata).await {
            Ok(output) => {
                info!(
                    target: TRACING_TARGET_STORE,
                    bucket = %bucket,
                    key = %key,
                    size = size,
                    "object written"
                );
                Ok(output)
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_STORE,
                    bucket = %bucket,
                    key = %key,
                    error = %e,
                    "failed to write object"
                );
                Err(Error::Store(e))
            }
        }
    }

    /// Reads only the metadata attached to `bucket`/`key`.
    ///
    /// No body is transferred.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `bucket` or `key` is absent,
    /// [`Error::Store`] for any client failure.
    #[instrument(skip(self), target = TRACING_TARGET_STORE, fields(bucket = %bucket, key = %key))]
    pub async fn get_metadata(&self, bucket: &str, key: &str) -> Result<Metadata> {
        if is_absent(bucket) || is_absent(key) {
            return Err(Error::invalid_argument("bucket and key are required"));
        }

        debug!(
            target: TRACING_TARGET_STORE,
            bucket = %bucket,
            key = %key,
            "reading object metadata"
        );

        match self.client.read_metadata(bucket, key).await {
            Ok(metadata) => {
                info!(
                    target: TRACING_TARGET_STORE,
                    bucket = %bucket,
                    key = %key,
                    entries = metadata.len(),
                    "object metadata read"
                );
                Ok(metadata)
            }
            Err(e) => {
                error!(
                    target: TRACING_TARGET_STORE,
                    bucket = %bucket,
                    key = %key,
                    error = %e,
                    "failed to read object metadata"
                );
                Err(Error::Store(e))
            }
        }
    }

    /// Reads and deserializes the value stored under `bucket`/`key`.
    ///
    /// Delegates to [`get_with_metadata`](Self::get_with_metadata) and
    /// discards the metadata, so both reads of the same address yield the
    /// same value.
    pub async fn get<T: DeserializeOwned>(&self, bucket: &str, key: &str) -> Result<T> {
        let (value, _metadata) = self.get_with_metadata(bucket, key).await?;
        Ok(value)
    }

    /// Reads the value stored under `bucket`/`key` together with its
    /// metadata.
    ///
    /// The body is decoded as UTF-8 text and parsed as JSON.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `bucket` or `key` is absent,
    /// [`Error::Utf8`]/[`Error::Json`] if the body is not UTF-8 JSON,
    /// [`Error::Store`] for any client failure.
    #[instrument(skip(self), target = TRACING_TARGET_STORE, fields(bucket = %bucket, key = %key))]
    pub async fn get_with_metadata<T: DeserializeOwned>(
        &self,
        bucket: &str,
        key: &str,
    ) -> Result<(T, Metadata)> {
        if is_absent(bucket) || is_absent(key) {
            return Err(Error::invalid_argument("bucket and key are required"));
        }

        debug!(
            target: TRACING_TARGET_STORE,
            bucket = %bucket,
            key = %key,
            "reading object"
        );

        let output = match self.client.read(bucket, key).await {
            Ok(output) => output,
            Err(e) => {
                error!(
                    target: TRACING_TARGET_STORE,
                    bucket = %bucket,
                    key = %key,
                    error = %e,
                    "failed to read object"
                );
                return Err(Error::Store(e));
            }
        };

        let size = output.body.len();
        let text = String::from_utf8(output.body.to_vec())?;
        let value = serde_json::from_str(&text)?;

        info!(
            target: TRACING_TARGET_STORE,
            bucket = %bucket,
            key = %key,
            size = size,
            "object read"
        );

        Ok((value, output.metadata))
    }
}
