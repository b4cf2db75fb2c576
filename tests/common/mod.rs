use async_trait::async_trait;
use kuberi_service::config::{Config, DatabaseConfig, GeminiConfig, ServerConfig};
use kuberi_service::error::AppError;
use kuberi_service::models::{ChatExchange, PurchaseRecord};
use kuberi_service::services::advisor::AdvisorService;
use kuberi_service::services::metrics;
use kuberi_service::services::providers::mock::MockTextProvider;
use kuberi_service::services::providers::TextProvider;
use kuberi_service::services::store::GoldStore;
use kuberi_service::startup::{build_router, AppState};
use secrecy::Secret;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// In-memory store that records inserts for assertions.
#[derive(Default)]
pub struct RecordingStore {
    pub chats: Mutex<Vec<ChatExchange>>,
    pub purchases: Mutex<Vec<PurchaseRecord>>,
}

#[async_trait]
impl GoldStore for RecordingStore {
    async fn record_chat(&self, exchange: ChatExchange) -> Result<(), AppError> {
        self.chats.lock().unwrap().push(exchange);
        Ok(())
    }

    async fn record_purchase(&self, record: PurchaseRecord) -> Result<(), AppError> {
        self.purchases.lock().unwrap().push(record);
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// Store whose operations always fail, for exercising the 500/503 paths.
pub struct FailingStore;

#[async_trait]
impl GoldStore for FailingStore {
    async fn record_chat(&self, _exchange: ChatExchange) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "chat_history insert failed"
        )))
    }

    async fn record_purchase(&self, _record: PurchaseRecord) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!(
            "purchases insert failed"
        )))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::DatabaseError(anyhow::anyhow!("store unreachable")))
    }
}

pub struct TestApp {
    pub address: String,
    pub store: Arc<RecordingStore>,
}

impl TestApp {
    /// Spawn the app with no configured provider: chat serves the fallback.
    pub async fn spawn() -> Self {
        Self::spawn_with_provider(Arc::new(MockTextProvider::new(false))).await
    }

    /// Spawn the app with a working mock provider.
    pub async fn spawn_with_mock_ai() -> Self {
        Self::spawn_with_provider(Arc::new(MockTextProvider::new(true))).await
    }

    pub async fn spawn_with_provider(provider: Arc<dyn TextProvider>) -> Self {
        let store = Arc::new(RecordingStore::default());
        let address = spawn_with_store(store.clone(), provider).await;
        TestApp { address, store }
    }
}

/// Spawn the router over an arbitrary store; returns the base address.
pub async fn spawn_with_store(
    store: Arc<dyn GoldStore>,
    provider: Arc<dyn TextProvider>,
) -> String {
    metrics::init_metrics();

    let state = AppState {
        config: test_config(),
        store,
        advisor: AdvisorService::new(provider),
    };
    let router = build_router(state);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });

    format!("http://127.0.0.1:{}", port)
}

fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: Secret::new("mongodb://localhost:27017/".to_string()),
            db_name: "kuberi_gold_test".to_string(),
        },
        gemini: GeminiConfig {
            api_key: Secret::new(String::new()),
            model: "gemini-2.0-flash".to_string(),
            api_base_url: "https://generativelanguage.googleapis.com/v1beta".to_string(),
        },
        service_name: "kuberi-service".to_string(),
    }
}
