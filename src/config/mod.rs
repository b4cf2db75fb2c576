use anyhow::Result;
use dotenvy::dotenv;
use secrecy::Secret;
use serde::Deserialize;
use std::env;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub gemini: GeminiConfig,
    pub service_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// Bind address for the HTTP listener.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseConfig {
    pub url: Secret<String>,
    pub db_name: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct GeminiConfig {
    /// API key; an empty key puts the advisor into fallback-only mode.
    pub api_key: Secret<String>,
    pub model: String,
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let host = env::var("KUBERI_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("KUBERI_SERVICE_PORT")
            .unwrap_or_else(|_| "8000".to_string())
            .parse()?;

        let db_url = env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string());
        let db_name = env::var("DATABASE_NAME").unwrap_or_else(|_| "kuberi_gold".to_string());

        let gemini_api_key = env::var("GEMINI_API_KEY").unwrap_or_default();
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        let gemini_api_base_url = env::var("GEMINI_API_BASE_URL")
            .unwrap_or_else(|_| "https://generativelanguage.googleapis.com/v1beta".to_string());

        Ok(Self {
            server: ServerConfig { host, port },
            database: DatabaseConfig {
                url: Secret::new(db_url),
                db_name,
            },
            gemini: GeminiConfig {
                api_key: Secret::new(gemini_api_key),
                model: gemini_model,
                api_base_url: gemini_api_base_url,
            },
            service_name: "kuberi-service".to_string(),
        })
    }
}
