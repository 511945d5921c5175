// src/state.rs
use std::sync::Arc;

use crate::config::Config;
use crate::error::GenerationError;
use crate::services::gemini::{GeminiClient, TextGenerator, Unconfigured};

pub type SharedState = Arc<AppState>;

/// Read-only for the lifetime of the server.
pub struct AppState {
    pub generator: Arc<dyn TextGenerator>,
}

impl AppState {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub fn from_config(config: &Config) -> Result<Self, GenerationError> {
        let generator: Arc<dyn TextGenerator> = match &config.api_key {
            Some(key) => Arc::new(GeminiClient::new(config, key.clone())?),
            None => {
                tracing::warn!("GEMINI_API_KEY is not set, every reply will use the fallback");
                Arc::new(Unconfigured)
            }
        };
        Ok(Self::new(generator))
    }
}
