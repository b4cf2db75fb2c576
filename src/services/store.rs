//! Persistence seam for chat history and purchases.

use crate::error::AppError;
use crate::models::{ChatExchange, PurchaseRecord};
use async_trait::async_trait;

/// Append-only store for chat exchanges and purchase records.
///
/// Both collections are independent; there are no updates or deletes.
#[async_trait]
pub trait GoldStore: Send + Sync {
    async fn record_chat(&self, exchange: ChatExchange) -> Result<(), AppError>;
    async fn record_purchase(&self, record: PurchaseRecord) -> Result<(), AppError>;

    /// Liveness check against the backing store, used by the readiness probe.
    async fn ping(&self) -> Result<(), AppError>;
}
