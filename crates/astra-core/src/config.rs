use crate::error::SkillError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level astra configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub skill: SkillConfig,
    #[serde(default)]
    pub locale: LocaleConfig,
}

/// General skill settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Keep the session open after speaking a fact, so the user can ask
    /// for another without relaunching the skill.
    #[serde(default)]
    pub keep_session_open: bool,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            keep_session_open: false,
        }
    }
}

/// Locale table settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// Locale used for the generic error response when the request's
    /// own locale cannot be resolved.
    #[serde(default = "default_locale")]
    pub default_locale: String,
    /// Directory of `<tag>.json` bundles. When unset, the built-in
    /// table is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_dir: Option<String>,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            default_locale: default_locale(),
            bundle_dir: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_locale() -> String {
    "en-US".to_string()
}

/// Load configuration from a TOML file, falling back to defaults when
/// the file does not exist.
pub fn load(path: &str) -> Result<Config, SkillError> {
    let path = Path::new(path);
    if !path.exists() {
        tracing::info!(
            "Config file not found at {}, using defaults",
            path.display()
        );
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| SkillError::Config(format!("failed to read {}: {}", path.display(), e)))?;

    let config: Config = toml::from_str(&content)
        .map_err(|e| SkillError::Config(format!("failed to parse config: {e}")))?;

    Ok(config)
}
