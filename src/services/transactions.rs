//! Simulated purchase creation.
//!
//! No payment gateway, ledger, or balance checks: a purchase is a record
//! with a freshly generated transaction ID.

use crate::models::PurchaseRecord;
use uuid::Uuid;

/// Generate a transaction ID: "TXN" + 12 uppercase hex characters.
///
/// Derived from a random 128-bit UUID v4, so uniqueness is probabilistic.
/// The purchases collection carries a unique index on transaction_id, which
/// turns a collision into an insert error instead of a silent duplicate.
pub fn generate_transaction_id() -> String {
    let hex = Uuid::new_v4().simple().to_string().to_uppercase();
    format!("TXN{}", &hex[..12])
}

/// Create a simulated purchase record. Amount is taken as given.
pub fn create_purchase(user_name: String, amount: f64) -> PurchaseRecord {
    PurchaseRecord::new(user_name, amount, generate_transaction_id())
}
