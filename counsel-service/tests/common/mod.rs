use counsel_service::config::{CounselConfig, GoogleConfig, ModelConfig};
use counsel_service::services::providers::TextProvider;
use counsel_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;
use std::time::Duration;

pub struct TestApp {
    pub address: String,
}

impl TestApp {
    /// Spawn the application on a random port with the given providers
    /// injected. Config is constructed directly so parallel tests never race
    /// on process environment variables.
    pub async fn spawn(
        question_provider: Arc<dyn TextProvider>,
        report_provider: Arc<dyn TextProvider>,
    ) -> Self {
        let config = CounselConfig {
            common: CoreConfig { port: 0 },
            models: ModelConfig {
                question_model: "gemini-2.5-flash".to_string(),
                report_model: "gemini-2.5-pro".to_string(),
                report_max_output_tokens: 256,
            },
            google: GoogleConfig {
                api_key: "test-api-key".to_string(),
            },
        };

        let app = Application::build_with_providers(config, question_provider, report_provider)
            .await
            .expect("Failed to build application");
        let port = app.port();

        tokio::spawn(async move {
            let _ = app.run_until_stopped().await;
        });

        // Give the server a moment to start accepting connections
        tokio::time::sleep(Duration::from_millis(50)).await;

        Self {
            address: format!("http://localhost:{}", port),
        }
    }
}
