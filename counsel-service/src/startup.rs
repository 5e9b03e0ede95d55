//! Application startup and lifecycle management.

use crate::config::CounselConfig;
use crate::handlers;
use crate::services::providers::TextProvider;
use crate::services::providers::gemini::{GeminiConfig, GeminiTextProvider};
use axum::{
    Router, middleware,
    routing::{get, post},
};
use service_core::error::AppError;
use service_core::middleware::request_id_middleware;
use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::trace::TraceLayer;

/// Shared application state: immutable config plus the two provider handles.
#[derive(Clone)]
pub struct AppState {
    pub config: CounselConfig,
    pub question_provider: Arc<dyn TextProvider>,
    pub report_provider: Arc<dyn TextProvider>,
}

pub struct Application {
    port: u16,
    server: Pin<Box<dyn Future<Output = std::io::Result<()>> + Send>>,
}

impl Application {
    /// Build the application with real Gemini providers.
    pub async fn build(config: CounselConfig) -> Result<Self, AppError> {
        let question_provider: Arc<dyn TextProvider> =
            Arc::new(GeminiTextProvider::new(GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.models.question_model.clone(),
            }));
        let report_provider: Arc<dyn TextProvider> =
            Arc::new(GeminiTextProvider::new(GeminiConfig {
                api_key: config.google.api_key.clone(),
                model: config.models.report_model.clone(),
            }));

        tracing::info!(
            question_model = %config.models.question_model,
            report_model = %config.models.report_model,
            "Initialized Gemini text providers"
        );

        Self::build_with_providers(config, question_provider, report_provider).await
    }

    /// Build with injected providers. Tests substitute mocks here.
    pub async fn build_with_providers(
        config: CounselConfig,
        question_provider: Arc<dyn TextProvider>,
        report_provider: Arc<dyn TextProvider>,
    ) -> Result<Self, AppError> {
        let state = AppState {
            config: config.clone(),
            question_provider,
            report_provider,
        };

        let app = Router::new()
            .route("/", get(handlers::index))
            .route("/health", get(handlers::health_check))
            .route("/ready", get(handlers::readiness_check))
            .route("/api/next_question", post(handlers::next_question))
            .route("/api/generate_report", post(handlers::generate_report))
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app).with_graceful_shutdown(shutdown_signal());

        Ok(Self {
            port,
            server: Box::pin(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
