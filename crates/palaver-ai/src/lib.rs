//! Chat engine for palaver.
//!
//! Provides the conversation session manager and its collaborators:
//! - `Session`: bounded message transcript with throttled sends
//! - `ChatClient`: the completion-service seam (OpenAI client included)
//! - `RateLimiter`: keyed admission control with an in-process
//!   sliding-window implementation

pub mod limiter;
pub mod openai;
pub mod session;

use async_trait::async_trait;

pub use limiter::{RateLimiter, SlidingWindowLimiter};
pub use openai::{OpenAiClient, OpenAiConfig};
pub use session::{Session, SessionConfig};

/// One request/response pair against the completion service: the whole
/// transcript goes in, a single reply text comes out.
#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError>;
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    /// No access token could be resolved at construction time.
    #[error("credential not found: set the GPT_TOKEN environment variable")]
    CredentialNotFound,

    /// The caller handed `send` something unusable; nothing was sent.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The throttle denied the call. The caller may retry later.
    #[error("rate limit exceeded")]
    RateLimitExceeded,

    /// The completion service failed (network error, non-2xx status,
    /// malformed response). Surfaced unchanged, never retried.
    #[error("upstream error: {0}")]
    Upstream(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn message_serializes_role_and_content() {
        let msg = Message::user("hello");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "user");
        assert_eq!(json["content"], "hello");
    }

    #[test]
    fn error_display() {
        assert_eq!(
            AiError::InvalidInput("empty message".into()).to_string(),
            "invalid input: empty message"
        );
        assert_eq!(AiError::RateLimitExceeded.to_string(), "rate limit exceeded");
        assert_eq!(
            AiError::Upstream("HTTP 500: boom".into()).to_string(),
            "upstream error: HTTP 500: boom"
        );
        assert!(AiError::CredentialNotFound.to_string().contains("GPT_TOKEN"));
    }
}
