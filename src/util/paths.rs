//! Locations under the rag-console data directory

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

const DIR_NAME: &str = ".rag-console";
const CONFIG_FILE: &str = "config.toml";
const LOG_FILE: &str = "rag-console.log";

/// Set once at startup from `--data-dir`
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Pin the data directory. Call before anything reads a path; later calls
/// are ignored and return false.
pub fn init_data_dir(custom_path: Option<PathBuf>) -> bool {
    let path = custom_path.unwrap_or_else(default_data_dir);
    match DATA_DIR.set(path) {
        Ok(()) => true,
        Err(rejected) => {
            tracing::debug!(
                rejected = %rejected.display(),
                current = %data_dir().display(),
                "Data directory already set"
            );
            false
        }
    }
}

fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DIR_NAME)
}

/// `~/.rag-console` unless overridden
pub fn data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(default_data_dir)
}

pub fn logs_dir() -> PathBuf {
    data_dir().join("logs")
}

pub fn log_file_path() -> PathBuf {
    logs_dir().join(LOG_FILE)
}

/// Config file looked up when `--config` is not given
pub fn config_path() -> PathBuf {
    config_path_in(&data_dir())
}

fn config_path_in(dir: &Path) -> PathBuf {
    dir.join(CONFIG_FILE)
}
