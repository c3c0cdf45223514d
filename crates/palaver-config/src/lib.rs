//! Palaver configuration system.
//!
//! TOML-based configuration with full validation. All sections use
//! serde defaults so partial configs work out of the box.

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::PalaverConfig;
pub use toml_loader::{default_config_path, load_default, load_from_path};

use palaver_common::ConfigError;

/// Convenience function to load config from the platform default path.
///
/// Loads `config.toml` from the OS config directory, creates a default
/// file if none exists, and validates the result.
pub fn load_config() -> Result<PalaverConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}
