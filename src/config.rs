use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::atlas::DEFAULT_QUOTA_BYTES;

/// Environment variables consulted, in order, for the chat service key.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "VITE_API_KEY"];

/// Root configuration structure, deserialized from `.manabo-atlas/config.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Chat service settings.
    pub advisor: AdvisorConfig,
    /// Map image settings.
    pub atlas: AtlasConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Generative model name, e.g. `gemini-2.5-flash`.
    pub model: String,
    /// Sampling temperature passed with every request.
    pub temperature: f32,
    /// Base URL of the generative language REST API.
    pub endpoint: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            temperature: 0.7,
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Directory holding the default `*_map.png` assets.
    pub asset_dir: PathBuf,
    /// Directory for the custom map store. Defaults to the platform data dir.
    pub store_dir: Option<PathBuf>,
    /// Largest serialized mapping the store accepts.
    pub quota_bytes: usize,
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("public"),
            store_dir: None,
            quota_bytes: DEFAULT_QUOTA_BYTES,
        }
    }
}

impl AtlasConfig {
    /// Resolved store directory: configured value, platform data dir, or
    /// `./.manabo-atlas` as a last resort.
    pub fn store_dir(&self) -> PathBuf {
        if let Some(dir) = &self.store_dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|d| d.join("manabo-atlas"))
            .unwrap_or_else(|| PathBuf::from(".manabo-atlas"))
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.manabo-atlas/config.toml`
/// 3. `~/.config/manabo-atlas/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".manabo-atlas").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("manabo-atlas")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
}

/// The chat service key from the environment (after any `.env` file has
/// been loaded), ignoring blank values.
pub fn api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|v| v.trim().to_string())
        .find(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.advisor.model, "gemini-2.5-flash");
        assert_eq!(cfg.advisor.temperature, 0.7);
        assert_eq!(cfg.atlas.asset_dir, PathBuf::from("public"));
        assert_eq!(cfg.atlas.quota_bytes, 5 * 1024 * 1024);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg: Config = toml::from_str(
            r#"
[advisor]
temperature = 0.2

[atlas]
store_dir = "/tmp/maps"
"#,
        )
        .unwrap();
        assert_eq!(cfg.advisor.temperature, 0.2);
        assert_eq!(cfg.advisor.model, "gemini-2.5-flash");
        assert_eq!(cfg.atlas.store_dir(), PathBuf::from("/tmp/maps"));
        assert_eq!(cfg.atlas.asset_dir, PathBuf::from("public"));
    }

    #[test]
    fn test_project_config_is_found() {
        let dir = TempDir::new().unwrap();
        let cfg_dir = dir.path().join(".manabo-atlas");
        std::fs::create_dir_all(&cfg_dir).unwrap();
        std::fs::write(
            cfg_dir.join("config.toml"),
            "[atlas]\nasset_dir = \"maps\"\nquota_bytes = 1024\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.atlas.asset_dir, PathBuf::from("maps"));
        assert_eq!(cfg.atlas.quota_bytes, 1024);
    }

    #[test]
    fn test_override_must_exist() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(load_config(dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[advisor\nmodel = 1").unwrap();
        let err = load_config(dir.path(), Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid config"));
    }
}
