use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use client_core::{
    gemini::{DEFAULT_API_BASE_URL, DEFAULT_MODEL},
    GeminiConfig, DEFAULT_BRIEF_TIMEOUT,
};
use serde::Deserialize;

pub const CONFIG_FILE_NAME: &str = "carspire.toml";

pub struct Settings {
    pub api_base_url: String,
    pub model: String,
    pub api_key: Option<String>,
    pub request_timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            model: DEFAULT_MODEL.into(),
            api_key: None,
            request_timeout_secs: DEFAULT_BRIEF_TIMEOUT.as_secs(),
        }
    }
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api_base_url", &self.api_base_url)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

impl Settings {
    pub fn gemini_config(&self) -> GeminiConfig {
        GeminiConfig {
            api_base_url: self.api_base_url.clone(),
            model: self.model.clone(),
            api_key: self.api_key.clone(),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    api_base_url: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    request_timeout_secs: Option<u64>,
}

/// `./carspire.toml` when present, otherwise the per-user config directory.
pub fn default_config_path() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    dirs::config_dir()
        .map(|dir| dir.join("carspire").join(CONFIG_FILE_NAME))
        .unwrap_or(local)
}

pub fn load_settings(path: &Path) -> Settings {
    let raw = if path.exists() {
        match read_settings_file(path) {
            Ok(raw) => Some(raw),
            Err(err) => {
                tracing::warn!("ignoring config file: {err:#}");
                None
            }
        }
    } else {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        None
    };

    settings_from_sources(raw.as_deref(), |name| std::env::var(name).ok())
}

fn read_settings_file(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path)
        .with_context(|| format!("failed to read config file '{}'", path.display()))
}

/// Layers defaults, then the TOML document, then environment overrides.
fn settings_from_sources(raw: Option<&str>, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Some(raw) = raw {
        match toml::from_str::<FileSettings>(raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.api_base_url {
                    settings.api_base_url = v;
                }
                if let Some(v) = file_cfg.model {
                    settings.model = v;
                }
                if let Some(v) = file_cfg.api_key {
                    settings.api_key = Some(v);
                }
                if let Some(v) = file_cfg.request_timeout_secs {
                    settings.request_timeout_secs = v;
                }
            }
            Err(err) => tracing::warn!("malformed config file, using defaults: {err}"),
        }
    }

    let env = |name: &str| env(name).filter(|value| !value.trim().is_empty());

    if let Some(v) = env("GEMINI_API_KEY") {
        settings.api_key = Some(v);
    }
    if let Some(v) = env("CARSPIRE__API_KEY") {
        settings.api_key = Some(v);
    }
    if let Some(v) = env("CARSPIRE__API_BASE_URL") {
        settings.api_base_url = v;
    }
    if let Some(v) = env("CARSPIRE__MODEL") {
        settings.model = v;
    }
    if let Some(v) = env("CARSPIRE__REQUEST_TIMEOUT_SECS") {
        match v.parse::<u64>() {
            Ok(parsed) => settings.request_timeout_secs = parsed,
            Err(_) => {
                tracing::warn!(value = %v, "ignoring non-numeric CARSPIRE__REQUEST_TIMEOUT_SECS")
            }
        }
    }

    settings
}
