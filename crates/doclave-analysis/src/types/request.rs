//! Analysis request in the provider's wire shape.

use doclave_core::DocumentRef;
use serde::{Deserialize, Serialize};

use super::FeatureType;

/// Bucket/key address of the document inside the remote store, in the
/// provider's wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct S3Object {
    /// Bucket holding the document.
    pub bucket: String,
    /// Object key, named `Name` on the wire.
    pub name: String,
}

/// Reference to the stored document to analyze.
///
/// The document body is never transferred by the wrapper; the provider
/// fetches it from the object store by address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct DocumentLocation {
    /// Remote-store address of the document.
    #[serde(rename = "S3Object")]
    pub s3_object: S3Object,
}

/// A single analysis submission: a document address plus the requested
/// feature set.
///
/// Serializes to the provider shape
/// `{"Document":{"S3Object":{"Bucket":…,"Name":…}},"FeatureTypes":[…]}`.
/// No local lifecycle: constructed, sent, discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AnalysisRequest {
    /// Document to analyze, by reference.
    pub document: DocumentLocation,
    /// Requested capabilities, in caller order.
    pub feature_types: Vec<FeatureType>,
}

impl AnalysisRequest {
    /// Builds a request for `document` with the given feature set.
    pub fn new(document: DocumentRef, features: &[FeatureType]) -> Self {
        Self {
            document: DocumentLocation {
                s3_object: S3Object {
                    bucket: document.bucket().to_owned(),
                    name: document.key().to_owned(),
                },
            },
            feature_types: features.to_vec(),
        }
    }

    /// Bucket/key address this request points at.
    pub fn document_ref(&self) -> DocumentRef {
        DocumentRef::new(
            self.document.s3_object.bucket.clone(),
            self.document.s3_object.name.clone(),
        )
    }
}
