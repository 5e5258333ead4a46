#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for analyzer operations.
pub const TRACING_TARGET_ANALYZER: &str = "doclave_analysis::analyzer";

pub mod analyzer;
pub mod client;
pub mod error;
pub mod types;

#[doc(hidden)]
pub mod prelude;

pub use doclave_core::{BoxedError, DocumentRef, ErrorClass};

// Re-export for convenience
pub use crate::analyzer::DocumentAnalyzer;
pub use crate::client::AnalysisClient;
pub use crate::error::{Error, Result};
pub use crate::types::{AnalysisRequest, DocumentLocation, FeatureType, ProviderError, S3Object};
