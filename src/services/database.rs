//! MongoDB-backed store for chat history and purchases.

use crate::error::AppError;
use crate::models::{ChatExchange, PurchaseRecord};
use crate::services::metrics;
use crate::services::store::GoldStore;
use async_trait::async_trait;
use mongodb::{
    bson::doc, options::IndexOptions, Client as MongoClient, Collection, Database, IndexModel,
};

const CHAT_COLLECTION: &str = "chat_history";
const PURCHASE_COLLECTION: &str = "purchases";

#[derive(Clone)]
pub struct MongoStore {
    client: MongoClient,
    db: Database,
}

impl MongoStore {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!("Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB: {}", e);
            AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
        })?;
        let db = client.database(database);
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(Self { client, db })
    }

    pub async fn initialize_indexes(&self) -> Result<(), AppError> {
        tracing::info!("Creating MongoDB indexes for kuberi-service");

        // Chat history is queried newest-first.
        let chat_timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(
                IndexOptions::builder()
                    .name("timestamp_idx".to_string())
                    .build(),
            )
            .build();

        self.chat_history()
            .create_index(chat_timestamp_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create chat timestamp index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        // Unique index on transaction_id: an ID collision surfaces as a
        // duplicate-key insert error rather than a silent duplicate.
        let transaction_id_index = IndexModel::builder()
            .keys(doc! { "transaction_id": 1 })
            .options(
                IndexOptions::builder()
                    .name("transaction_idx".to_string())
                    .unique(true)
                    .build(),
            )
            .build();

        self.purchases()
            .create_index(transaction_id_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create transaction_id index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        let purchase_timestamp_index = IndexModel::builder()
            .keys(doc! { "timestamp": -1 })
            .options(
                IndexOptions::builder()
                    .name("timestamp_idx".to_string())
                    .build(),
            )
            .build();

        self.purchases()
            .create_index(purchase_timestamp_index, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to create purchase timestamp index: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;

        tracing::info!("Successfully created all MongoDB indexes");
        Ok(())
    }

    fn chat_history(&self) -> Collection<ChatExchange> {
        self.db.collection(CHAT_COLLECTION)
    }

    fn purchases(&self) -> Collection<PurchaseRecord> {
        self.db.collection(PURCHASE_COLLECTION)
    }
}

#[async_trait]
impl GoldStore for MongoStore {
    async fn record_chat(&self, exchange: ChatExchange) -> Result<(), AppError> {
        self.chat_history()
            .insert_one(&exchange, None)
            .await
            .map_err(|e| {
                metrics::record_db_error("insert", CHAT_COLLECTION);
                tracing::error!("Failed to insert chat exchange: {}", e);
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn record_purchase(&self, record: PurchaseRecord) -> Result<(), AppError> {
        self.purchases()
            .insert_one(&record, None)
            .await
            .map_err(|e| {
                metrics::record_db_error("insert", PURCHASE_COLLECTION);
                tracing::error!(
                    transaction_id = %record.transaction_id,
                    "Failed to insert purchase record: {}",
                    e
                );
                AppError::DatabaseError(anyhow::anyhow!(e.to_string()))
            })?;
        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| AppError::DatabaseError(anyhow::anyhow!(e.to_string())))?;
        Ok(())
    }
}
