//! Assistant configuration parsed from environment variables.

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

const API_KEY_VARS: [&str; 3] = ["MEDIBOT_API_KEY", "GEMINI_API_KEY", "API_KEY"];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssistantTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantConfig {
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    pub timeouts: AssistantTimeouts,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeouts: AssistantTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl AssistantConfig {
    /// Build config from the process environment (after `.env` is loaded).
    ///
    /// Optional:
    /// - `MEDIBOT_API_KEY` (falls back to `GEMINI_API_KEY`, then `API_KEY`)
    /// - `MEDIBOT_MODEL`: default `gemini-3-flash-preview`
    /// - `MEDIBOT_API_BASE_URL`: default Generative Language v1beta endpoint
    /// - `MEDIBOT_REQUEST_TIMEOUT_SECS`: default 30
    /// - `MEDIBOT_CONNECT_TIMEOUT_SECS`: default 10
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = API_KEY_VARS
            .iter()
            .filter_map(|var| lookup(*var))
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty());

        let model = lookup("MEDIBOT_MODEL")
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let base_url = lookup("MEDIBOT_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
            .trim()
            .trim_end_matches('/')
            .to_string();
        if !(base_url.starts_with("https://") || base_url.starts_with("http://")) {
            return Err(ConfigError::Parse(format!(
                "MEDIBOT_API_BASE_URL must be an http(s) URL, got '{base_url}'"
            )));
        }

        let timeouts = AssistantTimeouts {
            request_secs: parse_secs(
                lookup("MEDIBOT_REQUEST_TIMEOUT_SECS"),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
            connect_secs: parse_secs(
                lookup("MEDIBOT_CONNECT_TIMEOUT_SECS"),
                DEFAULT_CONNECT_TIMEOUT_SECS,
            ),
        };

        Ok(Self {
            api_key,
            model,
            base_url,
            timeouts,
        })
    }
}

fn parse_secs(raw: Option<String>, default: u64) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
