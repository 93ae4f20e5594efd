use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::admin::{BrowserState, MatchCase, Section};
use crate::chat::{SessionOptions, PLACEHOLDER_RESPONSE};
use crate::ui::Screen;
use crate::util::paths::config_path;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Screen shown at startup
    pub default_screen: Screen,
    pub admin: AdminConfig,
    pub chat: ChatConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Section selected at startup
    pub default_section: Section,
    /// Search filter match policy
    pub match_case: MatchCase,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Delay before a reply is produced
    pub response_delay_ms: u64,
    /// Give up on a reply after this long
    pub response_timeout_ms: Option<u64>,
    /// Turns sent to the responder (0 = all)
    pub history_window: usize,
    /// Text of the simulated reply
    pub placeholder_response: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_screen: Screen::Admin,
            admin: AdminConfig {
                default_section: Section::Dashboard,
                match_case: MatchCase::Insensitive,
            },
            chat: ChatConfig {
                response_delay_ms: 1000,
                response_timeout_ms: None,
                history_window: 10,
                placeholder_response: PLACEHOLDER_RESPONSE.to_string(),
            },
        }
    }
}

/// TOML representation of the admin section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlAdminConfig {
    pub default_section: Option<String>,
    pub case_sensitive: Option<bool>,
}

/// TOML representation of the chat section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlChatConfig {
    pub response_delay_ms: Option<u64>,
    pub response_timeout_ms: Option<u64>,
    pub history_window: Option<usize>,
    pub placeholder_response: Option<String>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub default_screen: Option<String>,
    pub admin: Option<TomlAdminConfig>,
    pub chat: Option<TomlChatConfig>,
}

impl Config {
    /// Load from `path`, or from the default location when `None`.
    /// A missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(config_path);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Parse config file contents and merge them over the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let toml_config: TomlConfig = toml::from_str(contents)?;
        let mut config = Self::default();

        if let Some(screen) = toml_config.default_screen {
            config.default_screen =
                Screen::parse(&screen).ok_or(ConfigError::InvalidValue {
                    key: "default_screen",
                    value: screen,
                })?;
        }

        if let Some(admin) = toml_config.admin {
            if let Some(section) = admin.default_section {
                config.admin.default_section =
                    Section::parse(&section).map_err(|_| ConfigError::InvalidValue {
                        key: "admin.default_section",
                        value: section,
                    })?;
            }
            if let Some(case_sensitive) = admin.case_sensitive {
                config.admin.match_case = if case_sensitive {
                    MatchCase::Sensitive
                } else {
                    MatchCase::Insensitive
                };
            }
        }

        if let Some(chat) = toml_config.chat {
            if let Some(delay) = chat.response_delay_ms {
                config.chat.response_delay_ms = delay;
            }
            if let Some(timeout) = chat.response_timeout_ms {
                if timeout == 0 {
                    return Err(ConfigError::InvalidValue {
                        key: "chat.response_timeout_ms",
                        value: timeout.to_string(),
                    });
                }
                config.chat.response_timeout_ms = Some(timeout);
            }
            if let Some(window) = chat.history_window {
                config.chat.history_window = window;
            }
            if let Some(text) = chat.placeholder_response {
                config.chat.placeholder_response = text;
            }
        }

        Ok(config)
    }

    /// Initial browser state
    pub fn browser_state(&self) -> BrowserState {
        BrowserState::new(self.admin.default_section, self.admin.match_case)
    }

    /// Chat session timing
    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            response_delay: Duration::from_millis(self.chat.response_delay_ms),
            response_timeout: self.chat.response_timeout_ms.map(Duration::from_millis),
            history_window: self.chat.history_window,
        }
    }
}
