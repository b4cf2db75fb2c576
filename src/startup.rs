//! Application startup and lifecycle management.

use crate::config::Config;
use crate::error::AppError;
use crate::handlers;
use crate::services::advisor::AdvisorService;
use crate::services::database::MongoStore;
use crate::services::providers::gemini::GeminiTextProvider;
use crate::services::store::GoldStore;
use axum::{
    routing::{get, post},
    Router,
};
use secrecy::ExposeSecret;
use std::future::IntoFuture;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn GoldStore>,
    pub advisor: AdvisorService,
}

/// Build the service router. Public so tests can drive it directly.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::metrics_endpoint))
        .route("/api/chat", post(handlers::chat))
        .route("/api/purchase", post(handlers::purchase))
        .route("/api/gold-price", get(handlers::gold_price))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Application container for managing server lifecycle.
pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    /// Build the application with the given configuration.
    pub async fn build(config: Config) -> Result<Self, AppError> {
        let store = MongoStore::connect(
            config.database.url.expose_secret(),
            &config.database.db_name,
        )
        .await?;
        store.initialize_indexes().await.map_err(|e| {
            tracing::error!("Failed to initialize database indexes: {}", e);
            e
        })?;

        let provider = GeminiTextProvider::new(config.gemini.clone());
        if provider.is_configured() {
            tracing::info!(model = %config.gemini.model, "Gemini provider initialized");
        } else {
            tracing::warn!(
                "Gemini API key not configured - chat will serve the fallback response"
            );
        }
        let advisor = AdvisorService::new(Arc::new(provider));

        let state = AppState {
            config: config.clone(),
            store: Arc::new(store),
            advisor,
        };

        let router = build_router(state);

        // Port 0 = random port for testing
        let addr = config.server.address();
        let listener = TcpListener::bind(&addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, router);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    /// Get the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Run the application until stopped.
    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
