use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// JSON extractor that rejects through [`AppError`]: any malformed or
/// non-JSON body yields 400 "Invalid request format" (the parse detail goes
/// to the log, never to the caller); field-rule failures yield 422.
pub struct ValidatedJson<T>(pub T);

#[axum::async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|e| {
            tracing::debug!(error = %e, "Rejected malformed request body");
            AppError::BadRequest(anyhow::anyhow!("Invalid request format"))
        })?;

        value.validate()?;

        Ok(ValidatedJson(value))
    }
}
