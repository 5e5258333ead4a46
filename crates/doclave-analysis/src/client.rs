//! Client seam for the injected document-analysis collaborator.

use crate::types::{AnalysisRequest, ProviderError};

/// An already-configured remote document-analysis client.
///
/// Implementations are supplied by the caller at construction time; the
/// wrapper never builds or configures one itself. Failures carry an
/// inspectable provider code via [`ProviderError`].
#[async_trait::async_trait]
pub trait AnalysisClient: Send + Sync {
    /// Provider analysis response, returned by
    /// [`DocumentAnalyzer::analyze`](crate::analyzer::DocumentAnalyzer::analyze)
    /// without shaping.
    type Output: Send;

    /// Runs the analysis described by `request`.
    async fn analyze(&self, request: &AnalysisRequest) -> Result<Self::Output, ProviderError>;
}
