//! Gold investment advisor built on top of a text provider.
//!
//! Owns the prompt framing and the fallback policy: a provider failure
//! degrades to a canned response, never to an error.

use crate::services::metrics;
use crate::services::providers::{ProviderError, TextProvider};
use std::sync::Arc;
use std::time::Instant;

/// System instruction framing every generation request.
const SYSTEM_PROMPT: &str = "\
You are Kuberi AI, a friendly gold investment advisor for Simplify Money app.

Rules:
- Keep responses to 2-3 sentences max
- Be helpful and knowledgeable about gold investments
- Mention users can start investing with just ₹10
- Highlight digital gold benefits: 24K purity, high liquidity, no storage hassles
- Naturally encourage investment without being pushy";

/// Served whenever the provider cannot produce a response.
pub const FALLBACK_RESPONSE: &str = "I'm here to help with gold investments! You can start with just ₹10 on Simplify Money - it's 24K pure and hassle-free. Would you like to invest today?";

#[derive(Clone)]
pub struct AdvisorService {
    provider: Arc<dyn TextProvider>,
}

impl AdvisorService {
    pub fn new(provider: Arc<dyn TextProvider>) -> Self {
        Self { provider }
    }

    /// Answer a user question about gold investments.
    ///
    /// Total: any provider failure is absorbed into the fallback response.
    pub async fn respond(&self, user_question: &str) -> String {
        let prompt = build_prompt(user_question);
        let provider_name = self.provider.name();

        let started = Instant::now();
        match self.provider.generate(&prompt).await {
            Ok(text) => {
                metrics::record_provider_latency(provider_name, started.elapsed().as_secs_f64());
                metrics::record_chat_response("generated");
                text
            }
            Err(ProviderError::NotConfigured(_)) => {
                tracing::debug!(
                    provider = provider_name,
                    "Provider not configured, serving fallback response"
                );
                metrics::record_chat_response("fallback");
                FALLBACK_RESPONSE.to_string()
            }
            Err(e) => {
                metrics::record_provider_latency(provider_name, started.elapsed().as_secs_f64());
                metrics::record_provider_error(provider_name, e.kind());
                metrics::record_chat_response("fallback");
                tracing::warn!(
                    provider = provider_name,
                    error = %e,
                    "Provider call failed, serving fallback response"
                );
                FALLBACK_RESPONSE.to_string()
            }
        }
    }
}

fn build_prompt(user_question: &str) -> String {
    format!("{}\n\nUser: {}\n\nKuberi AI:", SYSTEM_PROMPT, user_question)
}
