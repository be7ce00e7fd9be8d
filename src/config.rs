//! Settings for the playback core

use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Runtime settings. Every field has a default, so a partial (or absent)
/// TOML file is fine.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base URL of the resolver service
    pub resolver_url: String,
    /// Delay before auto-skipping a failed track, in milliseconds.
    /// Keeps a run of unplayable tracks from turning into a tight loop.
    pub error_skip_delay_ms: u64,
    /// MIME type reported to the playback engine alongside the audio URL
    pub mime_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            resolver_url: "http://127.0.0.1:5000".to_string(),
            error_skip_delay_ms: 2000,
            mime_type: "audio/mp4".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let config = toml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        Ok(config)
    }

    pub fn error_skip_delay(&self) -> Duration {
        Duration::from_millis(self.error_skip_delay_ms)
    }
}
