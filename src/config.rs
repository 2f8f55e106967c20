//! Configuration file support for snippick.
//!
//! Configuration is loaded from `~/.config/snippick/config.toml` with the
//! following precedence:
//! 1. CLI arguments (highest priority)
//! 2. `SNIPPICK_EXAMPLE` environment variable
//! 3. Configuration file
//! 4. Default values (lowest priority)
//!
//! # Example Configuration
//!
//! ```toml
//! # ~/.config/snippick/config.toml
//! start_example = 1
//! copy_on_select = true
//! ```

use std::path::PathBuf;

use serde::Deserialize;

/// Main configuration structure.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Catalog id of the example to preselect at launch
    pub start_example: Option<u32>,

    /// Copy an example's code to the clipboard whenever it is selected
    pub copy_on_select: bool,
}

impl Config {
    /// Load configuration from the default config file path.
    ///
    /// Returns default configuration if the file doesn't exist or can't be
    /// parsed.
    pub fn load() -> Self {
        let config_path = Self::config_path();

        if !config_path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Warning: Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Warning: Failed to read config file: {}", e);
                Self::default()
            }
        }
    }

    /// Get the default configuration file path.
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("snippick")
            .join("config.toml")
    }

    /// Merge with CLI/environment overrides.
    ///
    /// The caller resolves CLI > `SNIPPICK_EXAMPLE` before passing the
    /// override; either takes precedence over the config file value.
    pub fn with_overrides(mut self, start_example: Option<u32>) -> Self {
        if start_example.is_some() {
            self.start_example = start_example;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.start_example.is_none());
        assert!(!config.copy_on_select);
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
            start_example = 17
            copy_on_select = true
        "#;

        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.start_example, Some(17));
        assert!(config.copy_on_select);
    }

    #[test]
    fn test_cli_override_wins() {
        let config = Config {
            start_example: Some(2),
            copy_on_select: false,
        };

        let merged = config.with_overrides(Some(5));
        assert_eq!(merged.start_example, Some(5));

        let untouched = Config::default().with_overrides(None);
        assert_eq!(untouched.start_example, None);
    }
}
