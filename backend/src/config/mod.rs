//! Central module for application-wide configuration settings.
//!
//! This module handles loading and managing configuration parameters such as
//! the data service endpoint and key, the session secret, and the server port.

use anyhow::{Context, Result, ensure};
use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_api_url: String,
    pub data_api_key: String,
    pub session_secret: String,
    pub server_port: u16,
    pub static_dir: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let data_api_url = env::var("DATA_API_URL").context("DATA_API_URL not set")?;
        let data_api_url = data_api_url.trim_end_matches('/').to_string();

        let data_api_key = env::var("DATA_API_KEY").context("DATA_API_KEY not set")?;

        let session_secret = env::var("SESSION_SECRET").context("SESSION_SECRET not set")?;
        // Cookie key derivation needs at least 32 bytes of material.
        ensure!(
            session_secret.len() >= 32,
            "SESSION_SECRET must be at least 32 characters"
        );

        let server_port = env::var("SERVER_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVER_PORT must be a valid number")?;

        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());

        Ok(Config {
            data_api_url,
            data_api_key,
            session_secret,
            server_port,
            static_dir,
        })
    }
}
