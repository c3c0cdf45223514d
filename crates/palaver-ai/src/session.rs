//! Conversation session management.
//!
//! A [`Session`] owns the ordered transcript of one conversation,
//! keeps it within a configurable length bound, and gates every
//! outbound call through a rate limiter before handing the whole
//! transcript to the completion service.

use std::sync::Arc;

use palaver_common::SessionId;
use tracing::debug;

use crate::limiter::{RateLimiter, SlidingWindowLimiter};
use crate::{AiError, ChatClient, Message, Role};

/// Tunables for a [`Session`].
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Maximum transcript length. Oldest non-system turns are evicted
    /// once the transcript grows past it. Must be >= 1.
    pub max_history: usize,
    /// Admissions per rolling second for this session's key.
    pub max_requests_per_second: u32,
    /// Key under which this session draws from the rate budget.
    /// Sessions sharing a key share one window.
    pub rate_limit_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_history: 20,
            max_requests_per_second: 4,
            rate_limit_key: "palaver".to_string(),
        }
    }
}

/// A conversation session with a bounded, throttled transcript.
///
/// The transcript is mutated in exactly three ways: a user turn and
/// its assistant reply are appended by a successful [`send`], and the
/// system instruction is replaced by [`set_system_instruction`]. A
/// failed `send` leaves the transcript untouched.
///
/// [`send`]: Session::send
/// [`set_system_instruction`]: Session::set_system_instruction
pub struct Session {
    id: SessionId,
    config: SessionConfig,
    client: Arc<dyn ChatClient>,
    limiter: Arc<dyn RateLimiter>,
    messages: Vec<Message>,
}

impl Session {
    /// Session with its own in-process sliding-window limiter, sized
    /// from `config.max_requests_per_second`.
    pub fn new(client: Arc<dyn ChatClient>, config: SessionConfig) -> Self {
        let limiter = Arc::new(SlidingWindowLimiter::new(config.max_requests_per_second));
        Self::with_limiter(client, limiter, config)
    }

    /// Session drawing from an injected (possibly shared) limiter.
    pub fn with_limiter(
        client: Arc<dyn ChatClient>,
        limiter: Arc<dyn RateLimiter>,
        config: SessionConfig,
    ) -> Self {
        Self {
            id: SessionId::new(),
            config,
            client,
            limiter,
            messages: Vec::new(),
        }
    }

    /// Replace the system instruction.
    ///
    /// Removes any existing system turn, then inserts the new one at
    /// position 0. Calling twice with the same text yields the same
    /// transcript.
    pub fn set_system_instruction(&mut self, text: impl Into<String>) {
        self.messages.retain(|m| m.role != Role::System);
        self.messages.insert(0, Message::system(text));
    }

    /// Send a user message and return the assistant's reply.
    ///
    /// The whole current transcript plus the new user turn goes to the
    /// completion service. The turn is committed only after the reply
    /// arrives; on any error the transcript is exactly as it was
    /// before the call.
    pub async fn send(&mut self, text: &str) -> Result<String, AiError> {
        if text.trim().is_empty() {
            return Err(AiError::InvalidInput("empty message".into()));
        }
        if !self.limiter.admit(&self.config.rate_limit_key) {
            return Err(AiError::RateLimitExceeded);
        }

        let mut request = self.messages.clone();
        request.push(Message::user(text));

        debug!(session = %self.id, turns = request.len(), "sending completion request");
        let reply = self.client.complete(&request).await?;

        self.messages.push(Message::user(text));
        self.messages.push(Message::assistant(reply.clone()));
        self.apply_history_bound();

        Ok(reply)
    }

    /// Evict the oldest non-system turns until the transcript fits
    /// `max_history`. The turn at position 0 is never evicted, so a
    /// system instruction survives any amount of conversation.
    pub fn apply_history_bound(&mut self) {
        while self.messages.len() > self.config.max_history && self.messages.len() > 1 {
            self.messages.remove(1);
        }
    }

    /// The full transcript, oldest first.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of turns in the transcript.
    pub fn message_count(&self) -> usize {
        self.messages.len()
    }

    pub fn id(&self) -> SessionId {
        self.id
    }
}
