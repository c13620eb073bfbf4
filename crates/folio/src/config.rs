use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILENAME: &str = "config.yaml";
const APP_DIR: &str = "folio";

pub const KEYS: &[&str] = &[
    "defaults.theme",
    "defaults.start_slide",
    "defaults.fullscreen",
    "defaults.content",
];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DefaultsConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,

    /// 1-indexed slide the viewer opens on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_slide: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullscreen: Option<bool>,

    /// Content file used when none is given on the command line.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<PathBuf>,
}

impl Config {
    pub fn path() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|d| d.join(APP_DIR).join(FILENAME))
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
    }

    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                anyhow::anyhow!("No config found. Run `folio config show` to see defaults.")
            } else {
                anyhow::anyhow!("Failed to read config: {e}")
            }
        })?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            tracing::debug!("Using default config: {e}");
            Self::default()
        })
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let yaml = serde_yaml::to_string(self)?;
        let contents = format!("# Folio configuration\n{yaml}");
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn theme(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.theme.as_deref())
    }

    pub fn start_slide(&self) -> Option<usize> {
        self.defaults.as_ref().and_then(|d| d.start_slide)
    }

    pub fn fullscreen(&self) -> bool {
        self.defaults
            .as_ref()
            .and_then(|d| d.fullscreen)
            .unwrap_or(false)
    }

    pub fn content(&self) -> Option<&Path> {
        self.defaults.as_ref().and_then(|d| d.content.as_deref())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let defaults = self.defaults.get_or_insert_with(DefaultsConfig::default);
        match key {
            "defaults.theme" => {
                match value {
                    "light" | "dark" => {}
                    _ => anyhow::bail!("Invalid theme: {value}. Must be 'light' or 'dark'."),
                }
                defaults.theme = Some(value.to_string());
            }
            "defaults.start_slide" => {
                let slide = match value.parse::<usize>() {
                    Ok(n) if n >= 1 => n,
                    _ => anyhow::bail!(
                        "Invalid start_slide: {value}. Must be a slide number starting at 1."
                    ),
                };
                defaults.start_slide = Some(slide);
            }
            "defaults.fullscreen" => {
                let fullscreen = match value {
                    "true" | "yes" | "on" => true,
                    "false" | "no" | "off" => false,
                    _ => anyhow::bail!("Invalid fullscreen: {value}. Must be 'true' or 'false'."),
                };
                defaults.fullscreen = Some(fullscreen);
            }
            "defaults.content" => {
                if value.is_empty() {
                    defaults.content = None;
                } else {
                    defaults.content = Some(PathBuf::from(value));
                }
            }
            _ => anyhow::bail!("Unknown config key: {key}. Valid keys: {}", KEYS.join(", ")),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_valid_values() {
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.start_slide", "3").unwrap();
        config.set("defaults.fullscreen", "yes").unwrap();
        config.set("defaults.content", "deck.yaml").unwrap();
        assert_eq!(config.theme(), Some("dark"));
        assert_eq!(config.start_slide(), Some(3));
        assert!(config.fullscreen());
        assert_eq!(config.content(), Some(Path::new("deck.yaml")));
    }

    #[test]
    fn test_set_rejects_invalid_values() {
        let mut config = Config::default();
        assert!(config.set("defaults.theme", "blue").is_err());
        assert!(config.set("defaults.start_slide", "0").is_err());
        assert!(config.set("defaults.start_slide", "first").is_err());
        assert!(config.set("defaults.fullscreen", "maybe").is_err());
        let err = config.set("defaults.speed", "fast").unwrap_err();
        assert!(err.to_string().contains("defaults.theme"));
        assert_eq!(config.theme(), None);
    }

    #[test]
    fn test_empty_content_clears_it() {
        let mut config = Config::default();
        config.set("defaults.content", "deck.yaml").unwrap();
        config.set("defaults.content", "").unwrap();
        assert_eq!(config.content(), None);
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::default();
        assert!(!config.fullscreen());
        assert_eq!(config.start_slide(), None);
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join(FILENAME);
        let mut config = Config::default();
        config.set("defaults.theme", "dark").unwrap();
        config.set("defaults.start_slide", "2").unwrap();
        config.save_to(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("# Folio configuration"));

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.theme(), Some("dark"));
        assert_eq!(loaded.start_slide(), Some(2));
        assert!(!loaded.fullscreen());
    }

    #[test]
    fn test_load_missing_file_mentions_command() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join(FILENAME)).unwrap_err();
        assert!(err.to_string().contains("folio config show"));
    }
}
