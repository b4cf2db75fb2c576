//! Gold price endpoint. Quotes are simulated and not persisted.

use crate::dtos::GoldPriceResponse;
use crate::services::pricing;
use axum::Json;
use chrono::Utc;

pub async fn gold_price() -> Json<GoldPriceResponse> {
    Json(GoldPriceResponse {
        success: true,
        price_per_gram: pricing::current_price(),
        currency: "INR".to_string(),
        timestamp: Utc::now(),
    })
}
