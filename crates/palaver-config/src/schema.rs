//! Configuration schema types for palaver.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with defaults matching the documented
//! session behavior.

use serde::{Deserialize, Serialize};

/// Root configuration for palaver.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PalaverConfig {
    pub session: SessionSection,
    pub openai: OpenAiSection,
}

/// Session behavior: transcript bound and request throttle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSection {
    /// Maximum transcript length before the oldest non-system turns
    /// are evicted. Must be >= 1.
    pub max_history: usize,
    /// Admitted requests per rolling second. Must be >= 1.
    pub max_requests_per_second: u32,
    /// Key under which sessions draw from the shared rate budget.
    /// Sessions with the same key share one window.
    pub rate_limit_key: String,
}

impl Default for SessionSection {
    fn default() -> Self {
        Self {
            max_history: 20,
            max_requests_per_second: 4,
            rate_limit_key: "palaver".to_string(),
        }
    }
}

/// Completion service endpoint settings. The access token is never
/// stored here; it is resolved from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAiSection {
    /// Model identifier sent with every completion request.
    pub model: String,
    /// API base URL, without the `/chat/completions` suffix.
    pub base_url: String,
}

impl Default for OpenAiSection {
    fn default() -> Self {
        Self {
            model: "gpt-4o-mini".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}
