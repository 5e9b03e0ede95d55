//! Text-generation provider abstraction.
//!
//! A trait seam over the upstream model API so handlers never talk to Gemini
//! directly and tests can substitute a mock.

pub mod gemini;
pub mod mock;

use async_trait::async_trait;
use thiserror::Error;

/// Error type for provider operations. Opaque and non-retryable from the
/// handlers' point of view.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Provider not configured: {0}")]
    NotConfigured(String),

    #[error("API error: {0}")]
    ApiError(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Content filtered")]
    ContentFiltered,

    #[error("Network error: {0}")]
    NetworkError(String),
}

/// Result of a provider call.
pub struct ProviderResponse {
    /// Generated text, absent when the model returned no candidate.
    pub text: Option<String>,

    /// Input tokens consumed.
    pub input_tokens: i32,

    /// Output tokens generated.
    pub output_tokens: i32,

    /// Reason why generation stopped.
    pub finish_reason: FinishReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Complete,
    Length,
    ContentFilter,
}

/// Generation parameters for a single request.
#[derive(Debug, Clone, Default)]
pub struct GenerationParams {
    /// Sampling temperature.
    pub temperature: Option<f32>,

    /// Maximum output tokens.
    pub max_output_tokens: Option<i32>,

    /// JSON schema constraining the output shape.
    pub output_schema: Option<serde_json::Value>,
}

/// Trait for text/JSON generation providers (Gemini in production).
#[async_trait]
pub trait TextProvider: Send + Sync {
    /// Generate a response for the given system instruction and user context.
    async fn generate(
        &self,
        system_instruction: &str,
        contents: &str,
        params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError>;

    /// Health check.
    async fn health_check(&self) -> Result<(), ProviderError>;
}
