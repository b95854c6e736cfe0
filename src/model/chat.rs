use crate::assistant::AssistantError;
use time::OffsetDateTime;
use uuid::Uuid;

pub const GREETING: &str =
    "Hello! I'm MediBOT AI. How can I assist you with your medical inquiries today?";

pub const DISCLAIMER_KEYWORD: &str = "DISCLAIMER";

pub const SYSTEM_INSTRUCTION: &str = "You are MediBOT, a professional medical AI assistant. \
Every response MUST begin with a professional medical disclaimer stating: \
'DISCLAIMER: I am an AI, not a doctor. This information is for educational purposes and not \
medical advice. For emergencies, call your local emergency services immediately.' \
After the disclaimer, provide helpful, accurate, and empathetic medical information based on \
current clinical standards. Keep your tone professional and encouraging.";

pub const TEMPERATURE: f32 = 0.7;

pub const EMPTY_REPLY_FALLBACK: &str =
    "I'm sorry, I'm having trouble processing your request at the moment.";

pub const ERROR_REPLY: &str = "DISCLAIMER: I am an AI, not a doctor. I encountered a technical \
error. Please try again or consult a medical professional.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub timestamp: OffsetDateTime,
}

impl ChatMessage {
    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content: content.into(),
            timestamp: OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc()),
        }
    }

    /// Lines of the message, flagged when they open with the disclaimer.
    pub fn lines(&self) -> impl Iterator<Item = (&str, bool)> {
        self.content
            .split('\n')
            .map(|line| (line, line.starts_with(DISCLAIMER_KEYWORD)))
    }
}

/// A prompt accepted by [`ChatSession::send`] that still needs a reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingPrompt {
    pub prompt: String,
}

/// Chat transcript plus the composer state.
///
/// At most one prompt is outstanding: `typing` is set by `send` and cleared
/// by `receive`.
#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Vec<ChatMessage>,
    draft: String,
    typing: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self {
            transcript: vec![ChatMessage::new(ChatRole::Assistant, GREETING)],
            draft: String::new(),
            typing: false,
        }
    }
}

impl ChatSession {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_typing(&self) -> bool {
        self.typing
    }

    pub fn set_draft(&mut self, draft: String) {
        self.draft = draft;
    }

    pub fn can_send(&self) -> bool {
        !self.typing && !self.draft.trim().is_empty()
    }

    pub fn send(&mut self) -> Option<PendingPrompt> {
        if !self.can_send() {
            return None;
        }

        let prompt = std::mem::take(&mut self.draft);
        self.transcript
            .push(ChatMessage::new(ChatRole::User, prompt.clone()));
        self.typing = true;
        Some(PendingPrompt { prompt })
    }

    /// Record the outcome of the outstanding prompt. Returns `false` when no
    /// prompt was outstanding.
    pub fn receive(&mut self, reply: Result<String, AssistantError>) -> bool {
        if !self.typing {
            log::warn!("Dropping assistant reply with no prompt outstanding");
            return false;
        }

        let content = match reply {
            Ok(text) if text.is_empty() => EMPTY_REPLY_FALLBACK.to_string(),
            Ok(text) => text,
            Err(err) => {
                log::error!("Assistant request failed: {err}");
                ERROR_REPLY.to_string()
            }
        };

        self.transcript
            .push(ChatMessage::new(ChatRole::Assistant, content));
        self.typing = false;
        true
    }
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
