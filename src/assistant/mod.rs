//! Text-generation collaborator used by the chat panel.
//!
//! The chat panel only needs `generate(prompt, instruction, temperature)`.
//! [`GeminiClient`] is the hosted implementation; [`Unconfigured`] stands in
//! when no API key is available so the panel falls back to its error reply.

pub mod gemini;

use crate::config::AssistantConfig;
use std::sync::Arc;
use std::time::Duration;

pub use gemini::GeminiClient;

/// Errors produced by the assistant client.
///
/// Every variant carries owned strings so the error can travel inside a
/// `Message`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    #[error("missing API key: set MEDIBOT_API_KEY")]
    MissingApiKey,

    #[error("API request failed: {0}")]
    ApiRequest(String),

    #[error("API response error: status {status}")]
    ApiResponse { status: u16, body: String },

    #[error("API response parse failed: {0}")]
    ApiParse(String),

    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    #[error("no reply within {secs}s")]
    Timeout { secs: u64 },
}

#[async_trait::async_trait]
pub trait Assistant: Send + Sync {
    /// Produce a plain-text reply to `prompt`.
    ///
    /// # Errors
    ///
    /// Returns an [`AssistantError`] when the service cannot be reached or
    /// answers with something other than a reply.
    async fn generate(
        &self,
        prompt: &str,
        instruction: &str,
        temperature: f32,
    ) -> Result<String, AssistantError>;
}

/// Assistant used when no API key is configured.
pub struct Unconfigured;

#[async_trait::async_trait]
impl Assistant for Unconfigured {
    async fn generate(
        &self,
        _prompt: &str,
        _instruction: &str,
        _temperature: f32,
    ) -> Result<String, AssistantError> {
        Err(AssistantError::MissingApiKey)
    }
}

/// Build the assistant described by `config`.
pub fn from_config(config: &AssistantConfig) -> Arc<dyn Assistant> {
    if config.api_key.is_none() {
        log::warn!("No API key configured; chat replies will report an error");
        return Arc::new(Unconfigured);
    }

    match GeminiClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            log::error!("Unable to build assistant client: {err}");
            Arc::new(Unconfigured)
        }
    }
}

/// Run one request, bounded by `timeout`.
pub async fn generate_reply(
    assistant: Arc<dyn Assistant>,
    prompt: String,
    instruction: &'static str,
    temperature: f32,
    timeout: Duration,
) -> Result<String, AssistantError> {
    match tokio::time::timeout(
        timeout,
        assistant.generate(&prompt, instruction, temperature),
    )
    .await
    {
        Ok(result) => result,
        Err(_) => Err(AssistantError::Timeout {
            secs: timeout.as_secs(),
        }),
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
