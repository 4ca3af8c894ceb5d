use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "nav_console.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub simulated_latency_ms: u64,
    pub log_filter: String,
    /// Script replayed when `replay` is given no path.
    pub initial_script: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulated_latency_ms: fleet_data::DEFAULT_LATENCY.as_millis() as u64,
            log_filter: "info".into(),
            initial_script: None,
        }
    }
}

impl Settings {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    simulated_latency_ms: Option<u64>,
    log_filter: Option<String>,
    initial_script: Option<PathBuf>,
}

/// Defaults, then the TOML file (explicit path or `nav_console.toml` if it
/// exists), then environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let file_cfg = match path {
        Some(path) => Some(read_file_settings(path)?),
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            Some(read_file_settings(Path::new(DEFAULT_CONFIG_PATH))?)
        }
        None => None,
    };
    if let Some(file_cfg) = file_cfg {
        if let Some(v) = file_cfg.simulated_latency_ms {
            settings.simulated_latency_ms = v;
        }
        if let Some(v) = file_cfg.log_filter {
            settings.log_filter = v;
        }
        if let Some(v) = file_cfg.initial_script {
            settings.initial_script = Some(v);
        }
    }

    apply_env(&mut settings, |key| std::env::var(key).ok());
    Ok(settings)
}

fn read_file_settings(path: &Path) -> anyhow::Result<FileSettings> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))?;
    toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file '{}'", path.display()))
}

fn apply_env(settings: &mut Settings, var: impl Fn(&str) -> Option<String>) {
    for key in ["NAV_LATENCY_MS", "APP__LATENCY_MS"] {
        if let Some(v) = var(key) {
            if let Ok(parsed) = v.trim().parse::<u64>() {
                settings.simulated_latency_ms = parsed;
            }
        }
    }
    for key in ["NAV_LOG", "APP__LOG_FILTER"] {
        if let Some(v) = var(key) {
            settings.log_filter = v;
        }
    }
}
