//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Leptos' own site options (address, site root) still come from
//! `[package.metadata.leptos]` via `get_configuration`.

use super::error::ConfigError;

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory served at `/images`
    /// Example: /srv/alumni/images
    pub images_dir: Option<String>,

    /// Whether responses are compressed (brotli + gzip)
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let images_dir = lookup("IMAGES_DIR").filter(|dir| !dir.trim().is_empty());
        let compression = match lookup("COMPRESSION") {
            Some(value) => parse_flag("COMPRESSION", &value)?,
            None => true,
        };

        Ok(Self {
            images_dir,
            compression,
        })
    }

    /// Check if a local image directory is configured
    pub fn serves_images(&self) -> bool {
        self.images_dir.is_some()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            images_dir: None,
            compression: true,
        }
    }
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}
