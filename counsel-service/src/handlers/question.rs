use crate::dtos::{QuestionResponse, SurveyRequest, question_response_schema};
use crate::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{Json, extract::State};
use service_core::error::AppError;

/// Fixed caller-facing message for any upstream failure on this route.
pub const QUESTION_FAILURE_MESSAGE: &str = "Failed to calculate next question.";

/// Serve the next interview question as a structured (question, options)
/// object.
#[tracing::instrument(skip(state, request), fields(history_len = request.history.len()))]
pub async fn next_question(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SurveyRequest>,
) -> Result<Json<QuestionResponse>, AppError> {
    let system_prompt = prompts::interview_system_prompt(&request);
    let user_context = prompts::interview_user_context(&request.history);

    let params = GenerationParams {
        temperature: Some(0.6),
        max_output_tokens: None,
        output_schema: Some(question_response_schema()),
    };

    let response = state
        .question_provider
        .generate(&system_prompt, &user_context, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Gemini next_question call failed");
            AppError::Upstream(QUESTION_FAILURE_MESSAGE.to_string())
        })?;

    tracing::debug!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Received next-question candidate"
    );

    let text = response.text.unwrap_or_default();
    let question: QuestionResponse = serde_json::from_str(&text).map_err(|e| {
        tracing::error!(error = %e, "Model output did not match the question shape");
        AppError::Upstream(QUESTION_FAILURE_MESSAGE.to_string())
    })?;

    Ok(Json(question))
}
