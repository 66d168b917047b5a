use crate::render::RendererConfig;
use eframe::egui;
use serde::{Deserialize, Serialize};
use snafu::{ResultExt, Snafu};
use std::path::{Path, PathBuf};

#[derive(Debug, Snafu)]
pub enum ConfigError {
    #[snafu(display("Failed to read config file {}: {}", path.display(), source))]
    Read { path: PathBuf, source: std::io::Error },
    #[snafu(display("Failed to parse config file: {}", source))]
    Parse { source: serde_json::Error },
    #[snafu(display("Failed to serialize config: {}", source))]
    Serialize { source: serde_json::Error },
    #[snafu(display("Failed to write config file {}: {}", path.display(), source))]
    Write { path: PathBuf, source: std::io::Error },
    #[snafu(display("Config version {} is newer than supported version {}", version, GuiConfig::CURRENT_VERSION))]
    TooNew { version: u32 },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GuiConfig {
    #[serde(default = "legacy_version")]
    version: u32,
    pub window_size: (f32, f32),
    pub renderer: RendererConfig,
    /// Where the last PDF was saved; the save dialog starts here.
    pub last_output_dir: Option<PathBuf>,
}

impl Default for GuiConfig {
    fn default() -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            window_size: (500.0, 600.0),
            renderer: RendererConfig::default(),
            last_output_dir: None,
        }
    }
}

// Files written before versioning have no version field.
fn legacy_version() -> u32 {
    1
}

impl GuiConfig {
    pub const CURRENT_VERSION: u32 = 2;

    #[cfg(test)]
    pub(crate) fn version(&self) -> u32 {
        self.version
    }

    pub fn window_size(&self) -> egui::Vec2 {
        egui::vec2(self.window_size.0, self.window_size.1)
    }

    /// Loads from the default location, falling back to defaults on any error.
    pub fn load() -> Self {
        match load_config(&get_config_path()) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default config");
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(&get_config_path(), self)
    }
}

pub fn get_config_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("pdfdrop").join("config.json")
    } else {
        PathBuf::from("pdfdrop_config.json")
    }
}

fn upgrade_config(mut config: GuiConfig) -> Result<GuiConfig, ConfigError> {
    while config.version < GuiConfig::CURRENT_VERSION {
        config = match config.version {
            0 | 1 => upgrade_v1_to_v2(config),
            v => return TooNewSnafu { version: v }.fail(),
        };
    }
    Ok(config)
}

// v1 had no renderer section; serde defaults already filled it in.
fn upgrade_v1_to_v2(mut config: GuiConfig) -> GuiConfig {
    if config.renderer.program.trim().is_empty() {
        config.renderer = RendererConfig::default();
    }
    config.version = 2;
    config
}

pub fn load_config(path: &Path) -> Result<GuiConfig, ConfigError> {
    if !path.exists() {
        return Ok(GuiConfig::default());
    }

    let config_str = std::fs::read_to_string(path).context(ReadSnafu { path })?;
    let config: GuiConfig = serde_json::from_str(&config_str).context(ParseSnafu)?;

    if config.version < GuiConfig::CURRENT_VERSION {
        let upgraded = upgrade_config(config)?;
        tracing::info!(version = upgraded.version, "Upgraded config");
        save_config(path, &upgraded)?;
        Ok(upgraded)
    } else if config.version > GuiConfig::CURRENT_VERSION {
        TooNewSnafu { version: config.version }.fail()
    } else {
        Ok(config)
    }
}

pub fn save_config(path: &Path, config: &GuiConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).context(WriteSnafu { path })?;
    }

    let config_str = serde_json::to_string_pretty(config).context(SerializeSnafu)?;
    std::fs::write(path, config_str).context(WriteSnafu { path })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, GuiConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = GuiConfig::default();
        config.last_output_dir = Some(PathBuf::from("/tmp/out"));
        config.renderer.extra_args = vec!["--presentational-hints".into()];

        save_config(&path, &config).unwrap();

        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_v1_config_is_upgraded_and_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "version": 1, "window_size": [640.0, 480.0] }"#).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.version(), GuiConfig::CURRENT_VERSION);
        assert_eq!(config.window_size, (640.0, 480.0));
        assert_eq!(config.renderer, RendererConfig::default());
        let on_disk: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(on_disk["version"], GuiConfig::CURRENT_VERSION);
    }

    #[test]
    fn test_unversioned_config_is_upgraded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "renderer": { "program": "" } }"#).unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.version(), GuiConfig::CURRENT_VERSION);
        assert_eq!(config.renderer.program, "weasyprint");
    }

    #[test]
    fn test_newer_config_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "version": 99 }"#).unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::TooNew { version: 99 })));
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();

        assert!(matches!(load_config(&path), Err(ConfigError::Parse { .. })));
    }
}
