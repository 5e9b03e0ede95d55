//! Mock provider for tests.

use super::{FinishReason, GenerationParams, ProviderError, ProviderResponse, TextProvider};
use async_trait::async_trait;
use std::sync::Mutex;

/// One recorded `generate` invocation.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub system_instruction: String,
    pub contents: String,
}

/// Mock text provider returning a canned response or a forced failure,
/// recording every prompt it was asked to generate from.
pub struct MockTextProvider {
    response: Option<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl MockTextProvider {
    pub fn with_response(text: impl Into<String>) -> Self {
        Self {
            response: Some(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            response: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextProvider for MockTextProvider {
    async fn generate(
        &self,
        system_instruction: &str,
        contents: &str,
        _params: &GenerationParams,
    ) -> Result<ProviderResponse, ProviderError> {
        self.calls.lock().unwrap().push(RecordedCall {
            system_instruction: system_instruction.to_string(),
            contents: contents.to_string(),
        });

        match &self.response {
            Some(text) => Ok(ProviderResponse {
                text: Some(text.clone()),
                input_tokens: (system_instruction.len() + contents.len()) as i32 / 4,
                output_tokens: text.len() as i32 / 4,
                finish_reason: FinishReason::Complete,
            }),
            None => Err(ProviderError::ApiError(
                "Mock provider failure".to_string(),
            )),
        }
    }

    async fn health_check(&self) -> Result<(), ProviderError> {
        match self.response {
            Some(_) => Ok(()),
            None => Err(ProviderError::ApiError(
                "Mock provider failure".to_string(),
            )),
        }
    }
}
