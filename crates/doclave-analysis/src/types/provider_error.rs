//! Provider-reported analysis failure.

use std::fmt;

use doclave_core::BoxedError;

/// A failure reported by the injected analysis client.
///
/// Carries the provider's error code when one was recognizable. The wrapper
/// inspects the code to decide between translation and pass-through; a
/// failure without a code always passes through.
pub struct ProviderError {
    code: Option<String>,
    message: String,
    source: Option<BoxedError>,
}

impl ProviderError {
    /// Creates a failure without a recognizable error code.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            source: None,
        }
    }

    /// Creates a failure carrying a provider error code.
    pub fn with_code(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the underlying client error.
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Provider error code, when one was recognizable.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Provider message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{code}] {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl fmt::Debug for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderError")
            .field("code", &self.code)
            .field("message", &self.message)
            .field("source", &self.source)
            .finish()
    }
}

impl std::error::Error for ProviderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}
