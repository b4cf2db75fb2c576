use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct ChatRequest {
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

fn default_user_name() -> String {
    "Guest User".to_string()
}

fn default_amount() -> f64 {
    10.0
}

#[derive(Debug, Deserialize)]
pub struct PurchaseRequest {
    #[serde(default = "default_user_name")]
    pub user_name: String,
    #[serde(default = "default_amount")]
    pub amount: f64,
}

#[derive(Debug, Serialize)]
pub struct PurchaseResponse {
    pub success: bool,
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct GoldPriceResponse {
    pub success: bool,
    pub price_per_gram: f64,
    pub currency: String,
    pub timestamp: DateTime<Utc>,
}
