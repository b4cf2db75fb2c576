//! Prometheus metrics for kuberi-service.
//!
//! Tracks chat outcomes, purchases, provider latency, and database errors.

use prometheus::{
    Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::OnceLock;

// Global registry
pub static REGISTRY: OnceLock<Registry> = OnceLock::new();

pub static CHAT_RESPONSES_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PURCHASES_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static PROVIDER_LATENCY_SECONDS: OnceLock<HistogramVec> = OnceLock::new();
pub static PROVIDER_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();
pub static DB_ERRORS_TOTAL: OnceLock<IntCounterVec> = OnceLock::new();

/// Initialize all metrics. Must be called once at startup.
pub fn init_metrics() {
    let registry = Registry::new();

    // Chat responses by source (generated vs fallback)
    let chat_responses = IntCounterVec::new(
        Opts::new("kuberi_chat_responses_total", "Total chat responses served"),
        &["source"],
    )
    .expect("Failed to create kuberi_chat_responses_total metric");

    // Simulated purchase counter
    let purchases = IntCounterVec::new(
        Opts::new("kuberi_purchases_total", "Total simulated gold purchases"),
        &["currency"],
    )
    .expect("Failed to create kuberi_purchases_total metric");

    // Provider latency histogram
    let provider_latency = HistogramVec::new(
        HistogramOpts::new(
            "kuberi_provider_latency_seconds",
            "Text provider API latency in seconds",
        )
        .buckets(vec![0.1, 0.5, 1.0, 2.0, 5.0, 10.0]),
        &["provider"],
    )
    .expect("Failed to create kuberi_provider_latency_seconds metric");

    // Provider error counter
    let provider_errors = IntCounterVec::new(
        Opts::new(
            "kuberi_provider_errors_total",
            "Total text provider errors",
        ),
        &["provider", "error_type"],
    )
    .expect("Failed to create kuberi_provider_errors_total metric");

    // Database error counter
    let db_errors = IntCounterVec::new(
        Opts::new("kuberi_db_errors_total", "Total database errors"),
        &["operation", "collection"],
    )
    .expect("Failed to create kuberi_db_errors_total metric");

    // Register all metrics
    registry
        .register(Box::new(chat_responses.clone()))
        .expect("Failed to register kuberi_chat_responses_total");
    registry
        .register(Box::new(purchases.clone()))
        .expect("Failed to register kuberi_purchases_total");
    registry
        .register(Box::new(provider_latency.clone()))
        .expect("Failed to register kuberi_provider_latency_seconds");
    registry
        .register(Box::new(provider_errors.clone()))
        .expect("Failed to register kuberi_provider_errors_total");
    registry
        .register(Box::new(db_errors.clone()))
        .expect("Failed to register kuberi_db_errors_total");

    // Initialize globals
    let _ = REGISTRY.set(registry);
    let _ = CHAT_RESPONSES_TOTAL.set(chat_responses);
    let _ = PURCHASES_TOTAL.set(purchases);
    let _ = PROVIDER_LATENCY_SECONDS.set(provider_latency);
    let _ = PROVIDER_ERRORS_TOTAL.set(provider_errors);
    let _ = DB_ERRORS_TOTAL.set(db_errors);

    tracing::info!("Prometheus metrics initialized");
}

/// Get metrics in Prometheus text format.
pub fn get_metrics() -> String {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();

    let registry = match REGISTRY.get() {
        Some(r) => r,
        None => {
            tracing::error!("Metrics registry not initialized");
            return "# Metrics registry not initialized\n".to_string();
        }
    };

    let metric_families = registry.gather();

    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        tracing::error!(error = %e, "Failed to encode metrics");
        return format!("# Failed to encode metrics: {}\n", e);
    }

    match String::from_utf8(buffer) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "Failed to convert metrics to UTF-8");
            format!("# Failed to convert metrics to UTF-8: {}\n", e)
        }
    }
}

// Helper functions for recording metrics

/// Record a served chat response (`source` is "generated" or "fallback").
pub fn record_chat_response(source: &str) {
    if let Some(counter) = CHAT_RESPONSES_TOTAL.get() {
        counter.with_label_values(&[source]).inc();
    }
}

/// Record a completed simulated purchase.
pub fn record_purchase(currency: &str) {
    if let Some(counter) = PURCHASES_TOTAL.get() {
        counter.with_label_values(&[currency]).inc();
    }
}

/// Record the latency of a text provider call.
pub fn record_provider_latency(provider: &str, duration_secs: f64) {
    if let Some(histogram) = PROVIDER_LATENCY_SECONDS.get() {
        histogram
            .with_label_values(&[provider])
            .observe(duration_secs);
    }
}

/// Record a text provider error.
pub fn record_provider_error(provider: &str, error_type: &str) {
    if let Some(counter) = PROVIDER_ERRORS_TOTAL.get() {
        counter.with_label_values(&[provider, error_type]).inc();
    }
}

/// Record a database error.
pub fn record_db_error(operation: &str, collection: &str) {
    if let Some(counter) = DB_ERRORS_TOTAL.get() {
        counter.with_label_values(&[operation, collection]).inc();
    }
}
