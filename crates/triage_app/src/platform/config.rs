use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use triage_core::DEFAULT_COPY_REVERT_MS;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "triage.ron";

/// How the host writes each rendered view to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    #[default]
    Text,
    /// One JSON document per render, for driving the dialog from scripts.
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub copy_revert_ms: u64,
    pub log_destination: LogDestination,
    pub output: OutputFormat,
    pub announce: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            copy_revert_ms: DEFAULT_COPY_REVERT_MS,
            log_destination: LogDestination::default(),
            output: OutputFormat::default(),
            announce: true,
        }
    }
}

impl AppConfig {
    pub fn copy_revert_delay(&self) -> Duration {
        Duration::from_millis(self.copy_revert_ms)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Loads `triage.ron` from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}
