use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::script::{ChatMode, PolicyId, Timing};

/// Helper function for default true value
fn default_true() -> bool {
    true
}

fn default_mode() -> ChatMode {
    ChatMode::Contact
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Conversation mode to open with
    #[serde(default = "default_mode")]
    pub mode: ChatMode,

    /// Policy the conversation pertains to; omitted means the default ("gl")
    #[serde(default)]
    pub policy: Option<PolicyId>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            mode: default_mode(),
            policy: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Whether the TUI writes a log file
    #[serde(default = "default_true")]
    pub file: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { file: true }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub demo: DemoConfig,

    /// Timeline delay overrides
    #[serde(default)]
    pub timing: Timing,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    pub fn config_path() -> PathBuf {
        #[cfg(target_os = "macos")]
        {
            let mut path = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()));
            path.push(".config/claire-demo/config.toml");
            path
        }

        #[cfg(not(target_os = "macos"))]
        {
            use directories::ProjectDirs;
            let proj_dirs = ProjectDirs::from("", "", "claire-demo")
                .expect("Failed to determine config directory");
            proj_dirs.config_dir().join("config.toml")
        }
    }

    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        let path = Self::config_path();

        if !path.exists() {
            return Err("Config file not found".into());
        }

        let content = fs::read_to_string(&path)?;
        let config = toml::from_str(&content)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").expect("empty config parses");
        assert_eq!(config.demo.mode, ChatMode::Contact);
        assert_eq!(config.demo.policy, None);
        assert_eq!(config.timing, Timing::default());
        assert!(config.logging.file);
    }

    #[test]
    fn partial_timing_override() {
        let config: Config = toml::from_str(
            "[demo]\nmode = \"overview\"\npolicy = \"ca\"\n\n[timing]\nend_pause_ms = 5000\n",
        )
        .expect("config parses");
        assert_eq!(config.demo.mode, ChatMode::Overview);
        assert_eq!(config.demo.policy, Some(PolicyId::Ca));
        assert_eq!(config.timing.end_pause_ms, 5000);
        assert_eq!(config.timing.after_user_ms, Timing::default().after_user_ms);
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config {
            demo: DemoConfig {
                mode: ChatMode::Premiums,
                policy: Some(PolicyId::Wc),
            },
            timing: Timing {
                end_pause_ms: 4500,
                ..Timing::default()
            },
            logging: LoggingConfig { file: false },
        };

        let serialized = toml::to_string_pretty(&config).expect("config serializes");
        let parsed: Config = toml::from_str(&serialized).expect("serialized config parses");

        assert_eq!(parsed.demo.mode, ChatMode::Premiums);
        assert_eq!(parsed.demo.policy, Some(PolicyId::Wc));
        assert_eq!(parsed.timing, config.timing);
        assert!(!parsed.logging.file);
    }
}
