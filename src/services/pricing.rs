//! Simulated gold price quotes.
//!
//! Purely illustrative: a fixed base price with uniform jitter, no market
//! feed and no continuity between calls.

use rand::Rng;

/// Base price in INR per gram.
const BASE_PRICE: f64 = 7200.0;

/// Maximum absolute jitter applied to the base price.
const MAX_JITTER: f64 = 10.0;

/// Quote the current simulated price per gram, rounded to 2 decimal places.
pub fn current_price() -> f64 {
    let mut rng = rand::thread_rng();
    let quote = BASE_PRICE + rng.gen_range(-MAX_JITTER..=MAX_JITTER);
    (quote * 100.0).round() / 100.0
}
