use crate::dtos::{ReportResponse, SurveyRequest};
use crate::prompts;
use crate::services::providers::GenerationParams;
use crate::startup::AppState;
use crate::utils::ValidatedJson;
use axum::{Json, extract::State};
use service_core::error::AppError;

/// Fixed caller-facing message for any upstream failure on this route.
pub const REPORT_FAILURE_MESSAGE: &str = "Failed to generate report.";

/// Generate the final counseling report from the full interview history.
#[tracing::instrument(skip(state, request), fields(history_len = request.history.len()))]
pub async fn generate_report(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<SurveyRequest>,
) -> Result<Json<ReportResponse>, AppError> {
    let system_prompt = prompts::report_system_prompt(&request);
    let user_context = prompts::report_user_context(&request.history);

    let params = GenerationParams {
        temperature: Some(0.4),
        max_output_tokens: Some(state.config.models.report_max_output_tokens),
        output_schema: None,
    };

    let response = state
        .report_provider
        .generate(&system_prompt, &user_context, &params)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "Gemini generate_report call failed");
            AppError::Upstream(REPORT_FAILURE_MESSAGE.to_string())
        })?;

    tracing::debug!(
        input_tokens = response.input_tokens,
        output_tokens = response.output_tokens,
        "Received report candidate"
    );

    let report = response.text.ok_or_else(|| {
        tracing::error!("Model returned no text for the report");
        AppError::Upstream(REPORT_FAILURE_MESSAGE.to_string())
    })?;

    Ok(Json(ReportResponse { report }))
}
