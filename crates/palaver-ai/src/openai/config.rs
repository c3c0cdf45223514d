//! OpenAI client configuration.

use std::fmt;

use crate::AiError;

/// Environment variable holding the API access token.
pub(crate) const TOKEN_VAR: &str = "GPT_TOKEN";

/// OpenAI client configuration.
#[derive(Clone)]
pub struct OpenAiConfig {
    pub token: String,
    pub model: String,
    pub base_url: String,
}

impl fmt::Debug for OpenAiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiConfig")
            .field("token", &"[REDACTED]")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAiConfig {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }

    /// Create config with the token resolved from the environment.
    ///
    /// Reads `GPT_TOKEN`; any `.env` loading must have happened before
    /// this is called. Fails with `CredentialNotFound` when the
    /// variable is unset or blank.
    pub fn from_env() -> Result<Self, AiError> {
        match std::env::var(TOKEN_VAR) {
            Ok(token) if !token.trim().is_empty() => Ok(Self::new(token)),
            _ => Err(AiError::CredentialNotFound),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_never_prints_the_token() {
        let config = OpenAiConfig::new("sk-very-secret");
        let debug = format!("{config:?}");
        assert!(!debug.contains("sk-very-secret"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn defaults_and_builders() {
        let config = OpenAiConfig::new("tok");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.base_url, "https://api.openai.com/v1");

        let config = config
            .with_model("gpt-4o")
            .with_base_url("http://localhost:8080/v1");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }
}
