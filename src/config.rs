//! Dispatcher settings.
//!
//! Priority: `{data_dir}/dispatch.toml` > `WARPCMD_*` env vars > defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::WarpCmdError;

pub const CONFIG_FILE: &str = "dispatch.toml";

fn default_notify_sender() -> bool {
    true
}

fn default_help_token() -> String {
    "?".to_string()
}

/// Runtime knobs for [`crate::services::Dispatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchConfig {
    /// Tell a denied sender which permission nodes would have let them in.
    #[serde(default = "default_notify_sender")]
    pub notify_sender: bool,
    /// The lone argument that asks for usage text.
    #[serde(default = "default_help_token")]
    pub help_token: String,
}

impl DispatchConfig {
    pub fn from_toml(contents: &str) -> Result<Self, WarpCmdError> {
        Ok(toml::from_str(contents)?)
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            notify_sender: default_notify_sender(),
            help_token: default_help_token(),
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Load the dispatcher config for `data_path`.
///
/// Unreadable or malformed files are logged and skipped.
pub fn load_dispatch_config(data_path: &Path) -> DispatchConfig {
    let config_path = data_path.join(CONFIG_FILE);
    if config_path.exists() {
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match DispatchConfig::from_toml(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded dispatch config from {}", config_path.display());
                    return config;
                }
                Err(e) => {
                    tracing::warn!(
                        "Failed to parse {}: {}. Using default.",
                        config_path.display(),
                        e
                    );
                }
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to read {}: {}. Using default.",
                    config_path.display(),
                    e
                );
            }
        }
    }

    let mut config = DispatchConfig::default();
    let mut from_env = false;

    if let Ok(value) = std::env::var("WARPCMD_NOTIFY_SENDER") {
        match parse_flag(&value) {
            Some(flag) => {
                config.notify_sender = flag;
                from_env = true;
            }
            None => tracing::warn!("Ignoring WARPCMD_NOTIFY_SENDER={:?}", value),
        }
    }
    if let Ok(token) = std::env::var("WARPCMD_HELP_TOKEN") {
        if token.trim().is_empty() {
            tracing::warn!("Ignoring empty WARPCMD_HELP_TOKEN");
        } else {
            config.help_token = token.trim().to_string();
            from_env = true;
        }
    }

    if from_env {
        tracing::info!("Loaded dispatch config from WARPCMD_* env");
    }
    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = DispatchConfig::default();
        assert!(config.notify_sender);
        assert_eq!(config.help_token, "?");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "notify_sender = false\n").unwrap();

        let config = load_dispatch_config(dir.path());
        assert!(!config.notify_sender);
        assert_eq!(config.help_token, "?");
    }

    #[test]
    fn test_malformed_file_falls_back() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "notify_sender = [").unwrap();

        let config = load_dispatch_config(dir.path());
        assert_eq!(config.help_token, "?");
    }

    #[test]
    fn test_from_toml_reports_config_error() {
        let err = DispatchConfig::from_toml("help_token = 3").unwrap_err();
        assert!(matches!(err, WarpCmdError::Config(_)));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
