//! Document analyzer over an injected analysis client.

use doclave_core::DocumentRef;
use tracing::{debug, error, info, instrument};

use crate::TRACING_TARGET_ANALYZER;
use crate::client::AnalysisClient;
use crate::error::{Error, Result};
use crate::types::{AnalysisRequest, FeatureType, ProviderError};

/// Provider codes translated to [`Error::Throttling`].
const THROTTLING_CODES: [&str; 2] = [
    "ThrottlingException",
    "ProvisionedThroughputExceededException",
];

/// Provider codes translated to [`Error::BadDocument`].
const BAD_DOCUMENT_CODES: [&str; 3] = [
    "UnsupportedDocumentException",
    "DocumentTooLargeException",
    "BadDocumentException",
];

/// Submits stored documents for structured analysis.
///
/// Documents are referenced by bucket/key; the body itself never passes
/// through this component. Each call is a single synchronous exchange with
/// the injected [`AnalysisClient`].
#[derive(Debug, Clone)]
pub struct DocumentAnalyzer<C> {
    client: C,
}

impl<C> DocumentAnalyzer<C> {
    /// Creates an analyzer over an already-configured client.
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Returns a reference to the injected client.
    pub fn client(&self) -> &C {
        &self.client
    }
}

impl<C: AnalysisClient> DocumentAnalyzer<C> {
    /// Analyzes the document stored at `bucket`/`key` with the given
    /// feature set, returning the provider response unchanged.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidArgument`] if `bucket`, `key`, or `features` is
    /// absent (checked before the client is touched). Provider failures
    /// carrying a throttling or bad-document code are translated to
    /// [`Error::Throttling`] and [`Error::BadDocument`]; everything else is
    /// surfaced verbatim as [`Error::Provider`].
    #[instrument(skip(self, features), target = TRACING_TARGET_ANALYZER, fields(bucket = %bucket, key = %key))]
    pub async fn analyze(
        &self,
        bucket: &str,
        key: &str,
        features: &[FeatureType],
    ) -> Result<C::Output> {
        if bucket.trim().is_empty() || key.trim().is_empty() || features.is_empty() {
            return Err(Error::InvalidArgument(
                "bucket, key and feature types are required fields".into(),
            ));
        }

        let request = AnalysisRequest::new(DocumentRef::new(bucket, key), features);

        debug!(
            target: TRACING_TARGET_ANALYZER,
            bucket = %bucket,
            key = %key,
            features = ?features,
            "submitting analysis request"
        );

        match self.client.analyze(&request).await {
            Ok(output) => {
                info!(
                    target: TRACING_TARGET_ANALYZER,
                    bucket = %bucket,
                    key = %key,
                    "analysis completed"
                );
                Ok(output)
            }
            Err(err) => {
                error!(
                    target: TRACING_TARGET_ANALYZER,
                    bucket = %bucket,
                    key = %key,
                    code = ?err.code(),
                    error = %err,
                    "analysis failed"
                );
                Err(translate(err))
            }
        }
    }
}

/// Maps the two recognized provider code sets into local categories; every
/// other failure passes through untouched.
fn translate(err: ProviderError) -> Error {
    match err.code() {
        Some(code) if THROTTLING_CODES.contains(&code) => Error::Throttling {
            code: code.to_owned(),
        },
        Some(code) if BAD_DOCUMENT_CODES.contains(&code) => Error::BadDocument {
            code: code.to_owned(),
        },
        _ => Error::Provider(err),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    /// Checks the submitted request against the provider wire shape and
    /// serves a canned response.
    struct ExpectingClient {
        expected: serde_json::Value,
        response: serde_json::Value,
    }

    #[async_trait::async_trait]
    impl AnalysisClient for ExpectingClient {
        type Output = serde_json::Value;

        async fn analyze(
            &self,
            request: &AnalysisRequest,
        ) -> Result<serde_json::Value, ProviderError> {
            let wire = serde_json::to_value(request).expect("request must serialize");
            assert_eq!(wire, self.expected);
            Ok(self.response.clone())
        }
    }

    /// Fails the test if the client is reached.
    struct UnreachableClient;

    #[async_trait::async_trait]
    impl AnalysisClient for UnreachableClient {
        type Output = ();

        async fn analyze(&self, _request: &AnalysisRequest) -> Result<(), ProviderError> {
            panic!("client must not be called when validation fails");
        }
    }

    /// Fails every call with the configured provider error.
    struct FailingClient {
        code: Option<&'static str>,
    }

    #[async_trait::async_trait]
    impl AnalysisClient for FailingClient {
        type Output = ();

        async fn analyze(&self, _request: &AnalysisRequest) -> Result<(), ProviderError> {
            Err(match self.code {
                Some(code) => ProviderError::with_code(code, "provider reported a failure"),
                None => ProviderError::new("provider reported a failure"),
            })
        }
    }

    #[tokio::test]
    async fn test_analyze_submits_by_reference_and_returns_response_unmodified() {
        let response = json!({
            "DocumentMetadata": {"Pages": 1},
            "Blocks": [{"BlockType": "PAGE"}],
        });
        let analyzer = DocumentAnalyzer::new(ExpectingClient {
            expected: json!({
                "Document": {
                    "S3Object": {"Bucket": "my-bucket", "Name": "hello/1/2/file.png"}
                },
                "FeatureTypes": ["FORMS"],
            }),
            response: response.clone(),
        });

        let output = analyzer
            .analyze("my-bucket", "hello/1/2/file.png", &[FeatureType::Forms])
            .await
            .unwrap();
        assert_eq!(output, response);
    }

    #[tokio::test]
    async fn test_analyze_rejects_absent_arguments_before_any_client_call() {
        let analyzer = DocumentAnalyzer::new(UnreachableClient);

        let cases: [(&str, &str, &[FeatureType]); 4] = [
            ("", "k", &[FeatureType::Forms]),
            ("b", "", &[FeatureType::Forms]),
            ("b", "k", &[]),
            ("  ", "k", &[FeatureType::Forms]),
        ];
        for (bucket, key, features) in cases {
            let err = analyzer.analyze(bucket, key, features).await.unwrap_err();
            assert!(err.is_invalid_argument());
            assert_eq!(
                err.to_string(),
                "bucket, key and feature types are required fields"
            );
        }
    }

    #[tokio::test]
    async fn test_throttling_codes_are_translated() {
        for code in THROTTLING_CODES {
            let analyzer = DocumentAnalyzer::new(FailingClient { code: Some(code) });
            let err = analyzer
                .analyze("b", "k", &[FeatureType::Forms])
                .await
                .unwrap_err();

            assert!(err.is_throttling(), "{code} must translate to throttling");
            assert!(err.is_retryable());
        }
    }

    #[tokio::test]
    async fn test_bad_document_codes_are_translated() {
        for code in BAD_DOCUMENT_CODES {
            let analyzer = DocumentAnalyzer::new(FailingClient { code: Some(code) });
            let err = analyzer
                .analyze("b", "k", &[FeatureType::Forms])
                .await
                .unwrap_err();

            assert!(err.is_bad_document(), "{code} must translate to bad-document");
            let Error::BadDocument { code: carried } = err else {
                unreachable!()
            };
            assert_eq!(carried, code);
        }
    }

    #[tokio::test]
    async fn test_unrecognized_codes_pass_through_unchanged() {
        let analyzer = DocumentAnalyzer::new(FailingClient {
            code: Some("AccessDeniedException"),
        });
        let err = analyzer
            .analyze("b", "k", &[FeatureType::Forms])
            .await
            .unwrap_err();

        let Error::Provider(original) = err else {
            panic!("expected pass-through, got {err:?}");
        };
        assert_eq!(original.code(), Some("AccessDeniedException"));
        assert_eq!(original.message(), "provider reported a failure");
    }

    #[tokio::test]
    async fn test_failures_without_a_code_pass_through_unchanged() {
        let analyzer = DocumentAnalyzer::new(FailingClient { code: None });
        let err = analyzer
            .analyze("b", "k", &[FeatureType::Forms])
            .await
            .unwrap_err();

        let Error::Provider(original) = err else {
            panic!("expected pass-through, got {err:?}");
        };
        assert_eq!(original.code(), None);
    }
}
