pub mod chat;
pub mod health;
pub mod price;
pub mod purchase;

pub use chat::chat;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use price::gold_price;
pub use purchase::purchase;
