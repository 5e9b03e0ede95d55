use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

/// Upper bound on report length, in output tokens.
const DEFAULT_REPORT_MAX_OUTPUT_TOKENS: i32 = 8192;

#[derive(Debug, Clone, Deserialize)]
pub struct CounselConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub models: ModelConfig,
    pub google: GoogleConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Model for interview questions (fast, cheap variant).
    pub question_model: String,
    /// Model for the final report (higher-quality variant).
    pub report_model: String,
    /// Output token cap applied to report generation.
    pub report_max_output_tokens: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleConfig {
    pub api_key: String,
}

impl CounselConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        // A missing credential must not prevent startup; upstream calls fail
        // at request time instead.
        let api_key = env::var("GEMINI_API_KEY").unwrap_or_else(|_| {
            tracing::warn!(
                "GEMINI_API_KEY environment variable not set. Gemini calls will fail until it is provided."
            );
            String::new()
        });

        Ok(CounselConfig {
            common: common_config,
            models: ModelConfig {
                question_model: get_env(
                    "COUNSEL_QUESTION_MODEL",
                    Some("gemini-2.5-flash"),
                    is_prod,
                )?,
                report_model: get_env("COUNSEL_REPORT_MODEL", Some("gemini-2.5-pro"), is_prod)?,
                report_max_output_tokens: get_env(
                    "COUNSEL_REPORT_MAX_OUTPUT_TOKENS",
                    Some(&DEFAULT_REPORT_MAX_OUTPUT_TOKENS.to_string()),
                    is_prod,
                )?
                .parse()
                .unwrap_or(DEFAULT_REPORT_MAX_OUTPUT_TOKENS),
            },
            google: GoogleConfig { api_key },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
