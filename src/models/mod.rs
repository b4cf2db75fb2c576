use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single question/answer exchange stored in chat history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatExchange {
    pub user_message: String,
    pub ai_response: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl ChatExchange {
    pub fn new(user_message: String, ai_response: String) -> Self {
        Self {
            user_message,
            ai_response,
            timestamp: Utc::now(),
        }
    }
}

/// Purchase lifecycle status. Simulated purchases complete immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PurchaseStatus {
    Completed,
}

/// A simulated digital gold purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PurchaseRecord {
    pub user_name: String,
    pub amount: f64,
    pub currency: String,
    pub transaction_id: String,
    pub status: PurchaseStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub timestamp: DateTime<Utc>,
}

impl PurchaseRecord {
    pub fn new(user_name: String, amount: f64, transaction_id: String) -> Self {
        Self {
            user_name,
            amount,
            currency: "INR".to_string(),
            transaction_id,
            status: PurchaseStatus::Completed,
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn purchase_status_serializes_lowercase() {
        let record = PurchaseRecord::new("Guest User".to_string(), 10.0, "TXN0123456789AB".to_string());
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["status"], "completed");
        assert_eq!(value["currency"], "INR");
    }
}
