//! Purchase endpoint: simulated ₹10 digital gold purchases.

use crate::dtos::{PurchaseRequest, PurchaseResponse};
use crate::error::AppError;
use crate::services::{metrics, transactions};
use crate::startup::AppState;
use axum::{extract::State, Json};

const PURCHASE_SUCCESS_MESSAGE: &str = "Digital gold purchase successful!";

pub async fn purchase(
    State(state): State<AppState>,
    Json(request): Json<PurchaseRequest>,
) -> Result<Json<PurchaseResponse>, AppError> {
    let record = transactions::create_purchase(request.user_name, request.amount);

    state.store.record_purchase(record.clone()).await?;
    metrics::record_purchase(&record.currency);

    tracing::info!(
        transaction_id = %record.transaction_id,
        amount = record.amount,
        "Recorded simulated gold purchase"
    );

    Ok(Json(PurchaseResponse {
        success: true,
        transaction_id: record.transaction_id,
        amount: record.amount,
        currency: record.currency,
        timestamp: record.timestamp,
        message: PURCHASE_SUCCESS_MESSAGE.to_string(),
    }))
}
