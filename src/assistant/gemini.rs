//! Google Generative Language API client (`models/{model}:generateContent`).
//!
//! Thin HTTP wrapper; response parsing is a pure function so it can be
//! tested without a network.

use super::{Assistant, AssistantError};
use crate::config::AssistantConfig;
use std::time::Duration;

pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiClient {
    pub fn new(config: &AssistantConfig) -> Result<Self, AssistantError> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(AssistantError::MissingApiKey)?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| AssistantError::HttpClientBuild(e.to_string()))?;

        Ok(Self {
            http,
            api_key,
            endpoint: endpoint_url(&config.base_url, &config.model),
        })
    }
}

#[async_trait::async_trait]
impl Assistant for GeminiClient {
    async fn generate(
        &self,
        prompt: &str,
        instruction: &str,
        temperature: f32,
    ) -> Result<String, AssistantError> {
        let body = build_request(prompt, instruction, temperature);

        let response = self
            .http
            .post(&self.endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AssistantError::ApiRequest(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| AssistantError::ApiRequest(e.to_string()))?;

        if !(200..300).contains(&status) {
            log::error!("Assistant returned status {status}");
            return Err(AssistantError::ApiResponse { status, body: text });
        }

        parse_response(&text)
    }
}

fn endpoint_url(base_url: &str, model: &str) -> String {
    format!(
        "{}/models/{model}:generateContent",
        base_url.trim_end_matches('/')
    )
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    system_instruction: Content<'a>,
    generation_config: GenerationConfig,
}

#[derive(serde::Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<OutgoingPart<'a>>,
}

#[derive(serde::Serialize)]
struct OutgoingPart<'a> {
    text: &'a str,
}

#[derive(serde::Serialize)]
struct GenerationConfig {
    temperature: f32,
}

#[derive(serde::Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(serde::Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<IncomingPart>,
}

#[derive(serde::Deserialize)]
struct IncomingPart {
    #[serde(default)]
    text: Option<String>,
}

fn build_request<'a>(
    prompt: &'a str,
    instruction: &'a str,
    temperature: f32,
) -> GenerateRequest<'a> {
    GenerateRequest {
        contents: vec![Content {
            role: Some("user"),
            parts: vec![OutgoingPart { text: prompt }],
        }],
        system_instruction: Content {
            role: None,
            parts: vec![OutgoingPart { text: instruction }],
        },
        generation_config: GenerationConfig { temperature },
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Text of the first candidate, parts concatenated. No candidates yields an
/// empty string; the caller decides what an empty reply means.
fn parse_response(json: &str) -> Result<String, AssistantError> {
    let api: GenerateResponse =
        serde_json::from_str(json).map_err(|e| AssistantError::ApiParse(e.to_string()))?;

    let text = api
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    Ok(text)
}

#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;
