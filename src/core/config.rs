use std::env;

use anyhow::{Result, anyhow};

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub openai_model: String,
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub system_message: String,
}

impl AppConfig {
    /// Read the config from environment variables. A missing API key
    /// is an error so that the app fails before the first turn rather
    /// than on it.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .ok_or(anyhow!("Missing env var OPENAI_API_KEY"))?;
        let openai_api_hostname = lookup("CONVERSE_LLM_HOST")
            .unwrap_or_else(|| "https://api.openai.com".to_string());
        let openai_model =
            lookup("CONVERSE_LLM_MODEL").unwrap_or_else(|| "gpt-4.1-mini".to_string());
        let system_message = lookup("CONVERSE_SYSTEM_MESSAGE")
            .unwrap_or_else(|| "You are a helpful assistant.".to_string());

        Ok(Self {
            openai_api_hostname,
            openai_api_key,
            openai_model,
            system_message,
        })
    }
}
