mod settings;

pub use settings::{AdminConfig, ChatConfig, Config, ConfigError, TomlConfig};
