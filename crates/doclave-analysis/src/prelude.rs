//! Prelude for the doclave-analysis crate
//!
//! Re-exports the most commonly used types from the crate to provide a
//! convenient single import for users.

pub use doclave_core::{BoxedError, DocumentRef, ErrorClass};

pub use crate::analyzer::DocumentAnalyzer;
pub use crate::client::AnalysisClient;
pub use crate::error::{Error, Result};
pub use crate::types::{AnalysisRequest, FeatureType, ProviderError};
