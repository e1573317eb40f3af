//! config.rs — runtime settings for the service shell.
//!
//! Settings come from an optional TOML file (path in `STROKE_GUARDIAN_CONFIG`,
//! default `config/stroke-guardian.toml`), with per-field environment
//! overrides on top. Everything has a sensible default, so a missing file is
//! not an error.

use std::{env, fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, Serialize};

pub const ENV_CONFIG_PATH: &str = "STROKE_GUARDIAN_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "config/stroke-guardian.toml";

fn default_bind_addr() -> String {
    "127.0.0.1:5000".to_string()
}
fn default_history_capacity() -> usize {
    crate::history::DEFAULT_CAPACITY
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Retained assessments per session; oldest evicted beyond this.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    /// Artificial latency before scoring, in milliseconds. The browser shell
    /// used 1500 ms to feel like a remote call; the service defaults to 0.
    #[serde(default)]
    pub assess_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            history_capacity: default_history_capacity(),
            assess_delay_ms: 0,
        }
    }
}

impl AppConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let data = fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.as_ref().display()))?;
        let cfg: AppConfig = toml::from_str(&data)
            .with_context(|| format!("parsing config file {}", path.as_ref().display()))?;
        Ok(cfg)
    }

    /// File (if present) + env overrides. Never fails on a missing file.
    pub fn load() -> anyhow::Result<Self> {
        let path = env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        let mut cfg = if Path::new(&path).exists() {
            Self::load_from_file(&path)?
        } else {
            Self::default()
        };
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    fn apply_env_overrides(&mut self) -> anyhow::Result<()> {
        if let Ok(addr) = env::var("STROKE_GUARDIAN_ADDR") {
            self.bind_addr = addr;
        }
        if let Ok(cap) = env::var("STROKE_GUARDIAN_HISTORY_CAPACITY") {
            self.history_capacity = cap
                .parse()
                .context("STROKE_GUARDIAN_HISTORY_CAPACITY must be an integer")?;
        }
        if let Ok(ms) = env::var("STROKE_GUARDIAN_DELAY_MS") {
            self.assess_delay_ms = ms
                .parse()
                .context("STROKE_GUARDIAN_DELAY_MS must be an integer")?;
        }
        Ok(())
    }
}
