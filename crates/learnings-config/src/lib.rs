use learnings_engine::SiteInfo;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Site settings. Every field has a default, so a config file only needs the
/// keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Name appended to page titles.
    pub author: String,
    /// Absolute origin of the deployed site.
    pub base_url: String,
    /// Social preview image for posts without an override.
    pub default_image: String,
    /// Description shown on the Learnings index page.
    pub index_description: String,
    /// Where `build` writes the static pages. Supports `~` and `$VARS`.
    pub output_path: PathBuf,
    /// Per-slug social preview images.
    pub image_overrides: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        let site = SiteInfo::default();
        Self {
            author: site.author,
            base_url: site.base_url,
            default_image: site.default_image,
            index_description: site.index_description,
            output_path: PathBuf::from("public"),
            image_overrides: site.image_overrides,
        }
    }
}

impl Config {
    /// The site identity used for page metadata.
    pub fn site_info(&self) -> SiteInfo {
        SiteInfo {
            author: self.author.clone(),
            base_url: self.base_url.clone(),
            default_image: self.default_image.clone(),
            index_description: self.index_description.clone(),
            image_overrides: self.image_overrides.clone(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output path
        config.output_path = Self::expand_path(&config.output_path).unwrap_or(config.output_path);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/learnings");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
