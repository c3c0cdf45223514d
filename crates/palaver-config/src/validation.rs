//! Configuration validation.
//!
//! Checks every numeric bound and endpoint string, collecting all
//! errors into a single `ConfigError` instead of stopping at the first.

use crate::schema::PalaverConfig;
use palaver_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PalaverConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_session(&mut errors, config);
    validate_openai(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_session(errors: &mut Vec<String>, config: &PalaverConfig) {
    if config.session.max_history < 1 {
        errors.push(format!(
            "session.max_history must be >= 1 (got {})",
            config.session.max_history
        ));
    }
    if config.session.max_requests_per_second < 1 {
        errors.push(format!(
            "session.max_requests_per_second must be >= 1 (got {})",
            config.session.max_requests_per_second
        ));
    }
    if config.session.rate_limit_key.trim().is_empty() {
        errors.push("session.rate_limit_key must not be empty".to_string());
    }
}

fn validate_openai(errors: &mut Vec<String>, config: &PalaverConfig) {
    if config.openai.model.trim().is_empty() {
        errors.push("openai.model must not be empty".to_string());
    }
    if !config.openai.base_url.starts_with("http://") && !config.openai.base_url.starts_with("https://")
    {
        errors.push(format!(
            "openai.base_url must be an http(s) URL (got {:?})",
            config.openai.base_url
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(validate(&PalaverConfig::default()).is_ok());
    }

    #[test]
    fn zero_max_history_rejected() {
        let mut config = PalaverConfig::default();
        config.session.max_history = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("max_history"));
    }

    #[test]
    fn zero_requests_per_second_rejected() {
        let mut config = PalaverConfig::default();
        config.session.max_requests_per_second = 0;
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("max_requests_per_second"));
    }

    #[test]
    fn empty_rate_limit_key_rejected() {
        let mut config = PalaverConfig::default();
        config.session.rate_limit_key = "  ".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("rate_limit_key"));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let mut config = PalaverConfig::default();
        config.openai.base_url = "ftp://example.com".to_string();
        let err = validate(&config).unwrap_err();
        assert!(err.to_string().contains("base_url"));
    }

    #[test]
    fn all_errors_collected_in_one_pass() {
        let mut config = PalaverConfig::default();
        config.session.max_history = 0;
        config.session.max_requests_per_second = 0;
        config.openai.model = String::new();
        let err = validate(&config).unwrap_err().to_string();
        assert!(err.contains("max_history"));
        assert!(err.contains("max_requests_per_second"));
        assert!(err.contains("model"));
    }
}
