//! OpenAI client struct, request building, and response parsing.

use crate::{AiError, Message};

use super::config::OpenAiConfig;

/// OpenAI chat-completions client.
pub struct OpenAiClient {
    pub(crate) config: OpenAiConfig,
    pub(crate) http: reqwest::Client,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Construct the client with the token taken from the environment.
    pub fn from_env() -> Result<Self, AiError> {
        Ok(Self::new(OpenAiConfig::from_env()?))
    }

    /// Full URL of the chat-completions endpoint.
    pub(crate) fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'))
    }

    /// Build the JSON request body. The message list goes over the
    /// wire in transcript order, exactly one completion is requested.
    pub(crate) fn build_request_body(&self, messages: &[Message]) -> serde_json::Value {
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
        })
    }

    /// Pull the single reply text out of a completions response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<String, AiError> {
        json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| AiError::Upstream("response has no choices[0].message.content".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Role;

    fn client() -> OpenAiClient {
        OpenAiClient::new(OpenAiConfig::new("tok"))
    }

    #[test]
    fn endpoint_joins_base_url_cleanly() {
        let client = OpenAiClient::new(
            OpenAiConfig::new("tok").with_base_url("http://localhost:9999/v1/"),
        );
        assert_eq!(client.endpoint(), "http://localhost:9999/v1/chat/completions");
    }

    #[test]
    fn request_body_carries_model_and_ordered_messages() {
        let messages = vec![
            Message::system("be brief"),
            Message::user("hi"),
            Message::assistant("hello"),
            Message::user("still there?"),
        ];
        let body = client().build_request_body(&messages);

        assert_eq!(body["model"], "gpt-4o-mini");
        let wire = body["messages"].as_array().unwrap();
        assert_eq!(wire.len(), 4);
        assert_eq!(wire[0]["role"], "system");
        assert_eq!(wire[1]["content"], "hi");
        assert_eq!(wire[3]["role"], "user");
    }

    #[test]
    fn parse_response_reads_first_choice() {
        let json = serde_json::json!({
            "choices": [
                {"message": {"role": "assistant", "content": "42"}},
                {"message": {"role": "assistant", "content": "ignored"}}
            ]
        });
        assert_eq!(client().parse_response(json).unwrap(), "42");
    }

    #[test]
    fn parse_response_rejects_malformed_body() {
        let json = serde_json::json!({"choices": []});
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, AiError::Upstream(_)));

        let json = serde_json::json!({"error": {"message": "bad key"}});
        assert!(client().parse_response(json).is_err());
    }

    #[test]
    fn role_round_trips_through_wire_format() {
        let msg: Message =
            serde_json::from_value(serde_json::json!({"role": "assistant", "content": "ok"}))
                .unwrap();
        assert_eq!(msg.role, Role::Assistant);
    }
}
