pub mod advisor;
pub mod database;
pub mod metrics;
pub mod pricing;
pub mod providers;
pub mod store;
pub mod transactions;
