//! ChatClient trait implementation for OpenAiClient.

use async_trait::async_trait;
use tracing::debug;

use crate::{AiError, ChatClient, Message};

use super::client::OpenAiClient;

#[async_trait]
impl ChatClient for OpenAiClient {
    async fn complete(&self, messages: &[Message]) -> Result<String, AiError> {
        let body = self.build_request_body(messages);

        debug!(model = %self.config.model, turns = messages.len(), "OpenAI API request");

        let response = self
            .http
            .post(self.endpoint())
            .bearer_auth(&self.config.token)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AiError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(AiError::Upstream(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::Upstream(e.to_string()))?;

        self.parse_response(json)
    }
}
