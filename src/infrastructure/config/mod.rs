//! Configuration management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use crate::application::errors::ConfigError;

const WAIT_FOR_KEY_ENV: &str = "MEDIATOR_WAIT_FOR_KEY";

/// Demo configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub conversation: ConversationConfig,
    pub console: ConsoleConfig,
}

/// The two participants and the line each one sends
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConversationConfig {
    pub first: ParticipantConfig,
    pub second: ParticipantConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ParticipantConfig {
    pub name: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ConsoleConfig {
    pub wait_for_key: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            conversation: ConversationConfig {
                first: ParticipantConfig {
                    name: "Colleague1".to_string(),
                    message: "How are you?".to_string(),
                },
                second: ParticipantConfig {
                    name: "Colleague2".to_string(),
                    message: "Fine, thanks".to_string(),
                },
            },
            console: ConsoleConfig {
                wait_for_key: true,
            },
        }
    }
}

impl Config {
    pub fn load(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read config: {}", e)))?;

        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse config: {}", e)))
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    pub fn load_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env()?;
        Ok(config)
    }

    /// Load `path` if it exists, falling back to defaults when it is missing
    /// or unreadable. Environment overrides apply either way.
    pub fn load_or_env(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Self::load_env();
        }

        match Self::load(path) {
            Ok(mut config) => {
                tracing::info!("Loaded config from {}", path.display());
                config.apply_env()?;
                Ok(config)
            }
            Err(e) => {
                tracing::warn!("Failed to load config: {}, using defaults", e);
                Self::load_env()
            }
        }
    }

    /// Apply environment overrides on top of the current values
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Ok(value) = std::env::var(WAIT_FOR_KEY_ENV) {
            self.console.wait_for_key = parse_flag(&value).ok_or_else(|| {
                ConfigError::InvalidValue(format!("{}={:?}", WAIT_FOR_KEY_ENV, value))
            })?;
        }
        Ok(())
    }

    /// Reject configs that would produce an empty conversation line
    pub fn validate(&self) -> Result<(), ConfigError> {
        let participants = [
            ("conversation.first", &self.conversation.first),
            ("conversation.second", &self.conversation.second),
        ];

        for (key, participant) in participants {
            if participant.name.trim().is_empty() {
                return Err(ConfigError::MissingField(format!("{}.name", key)));
            }
            if participant.message.is_empty() {
                return Err(ConfigError::MissingField(format!("{}.message", key)));
            }
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_default_matches_demo() {
        let config = Config::default();
        assert_eq!(config.conversation.first.name, "Colleague1");
        assert_eq!(config.conversation.first.message, "How are you?");
        assert_eq!(config.conversation.second.name, "Colleague2");
        assert_eq!(config.conversation.second.message, "Fine, thanks");
        assert!(config.console.wait_for_key);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml() {
        let yaml = r#"
conversation:
  first:
    name: Alice
    message: Hi Bob
  second:
    name: Bob
    message: Hi Alice
console:
  wait-for-key: false
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.conversation.first.name, "Alice");
        assert_eq!(config.conversation.second.message, "Hi Alice");
        assert!(!config.console.wait_for_key);
    }

    #[test]
    fn test_yaml_output_loads_back() {
        let config = Config::default();
        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("wait-for-key"));
        assert_eq!(Config::from_yaml(&yaml).unwrap(), config);
    }

    #[test]
    fn test_invalid_yaml_is_parse_error() {
        let err = Config::from_yaml("conversation: [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_is_parse_error() {
        let err = Config::load("/nonexistent/mediator.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut config = Config::default();
        config.conversation.second.name = "  ".to_string();

        match config.validate() {
            Err(ConfigError::MissingField(field)) => assert_eq!(field, "conversation.second.name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_validate_rejects_empty_message() {
        let mut config = Config::default();
        config.conversation.first.message.clear();

        assert!(matches!(config.validate(), Err(ConfigError::MissingField(_))));
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag(" FALSE "), Some(false));
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    #[serial]
    fn test_load_env_override() {
        std::env::set_var(WAIT_FOR_KEY_ENV, "no");

        let config = Config::load_env().unwrap();
        assert!(!config.console.wait_for_key);

        // Clean up
        std::env::remove_var(WAIT_FOR_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_load_env_rejects_bad_flag() {
        std::env::set_var(WAIT_FOR_KEY_ENV, "sometimes");

        match Config::load_env() {
            Err(ConfigError::InvalidValue(value)) => assert!(value.contains("sometimes")),
            other => panic!("unexpected result: {:?}", other),
        }

        std::env::remove_var(WAIT_FOR_KEY_ENV);
    }

    #[test]
    #[serial]
    fn test_load_or_env_missing_file_uses_defaults() {
        std::env::remove_var(WAIT_FOR_KEY_ENV);
        let dir = TempDir::new().unwrap();

        let config = Config::load_or_env(dir.path().join("mediator.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_load_or_env_malformed_file_uses_defaults() {
        std::env::remove_var(WAIT_FOR_KEY_ENV);
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mediator.yaml");
        std::fs::write(&path, "conversation: [not, a, map").unwrap();

        let config = Config::load_or_env(&path).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_load_or_env_applies_env_over_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mediator.yaml");
        let mut file_config = Config::default();
        file_config.conversation.first.name = "Alice".to_string();
        std::fs::write(&path, file_config.to_yaml().unwrap()).unwrap();
        std::env::set_var(WAIT_FOR_KEY_ENV, "0");

        let config = Config::load_or_env(&path).unwrap();

        std::env::remove_var(WAIT_FOR_KEY_ENV);
        assert_eq!(config.conversation.first.name, "Alice");
        assert!(!config.console.wait_for_key);
    }
}
