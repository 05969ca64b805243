//! Generator configuration
//!
//! Every field has a default, so running without a config file produces the
//! standard favicon set. A TOML file can override any part of it.

use crate::assets::{standalone_file_name, MAX_CONTAINER_SIDE};
use crate::core::IconSize;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the Apple touch icon alias
pub const APPLE_TOUCH_ICON: &str = "apple-touch-icon.png";
const APPLE_TOUCH_ICON_SIDE: u32 = 180;

/// Errors that can occur while loading or validating the config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Icon sizes must be positive, got {0}")]
    ZeroSize(IconSize),

    #[error("Icon container frames cannot exceed 256 pixels per side, got {0}")]
    FrameTooLarge(IconSize),

    #[error("Invalid output file name {0:?}")]
    InvalidFileName(String),

    #[error("Output file {0} is produced more than once")]
    DuplicateOutput(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory all assets are written to
    pub output_dir: PathBuf,
    pub container: ContainerConfig,
    pub standalone: StandaloneConfig,
    /// Extra PNGs saved under fixed names
    pub aliases: Vec<AliasConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("app"),
            container: ContainerConfig::default(),
            standalone: StandaloneConfig::default(),
            aliases: Vec::new(),
        }
    }
}

/// The multi-size ICO
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerConfig {
    pub file_name: String,
    pub sizes: Vec<IconSize>,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            file_name: "favicon.ico".to_string(),
            sizes: [16, 32, 48, 64, 128].map(IconSize::square).to_vec(),
        }
    }
}

/// One PNG per size, named after its dimensions
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StandaloneConfig {
    pub sizes: Vec<IconSize>,
}

impl Default for StandaloneConfig {
    fn default() -> Self {
        Self {
            sizes: [16, 32, 96, 180, 192, 512].map(IconSize::square).to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AliasConfig {
    pub file_name: String,
    pub size: IconSize,
}

impl AliasConfig {
    pub fn apple_touch_icon() -> Self {
        Self {
            file_name: APPLE_TOUCH_ICON.to_string(),
            size: IconSize::square(APPLE_TOUCH_ICON_SIDE),
        }
    }
}

impl GeneratorConfig {
    /// Load and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Add the Apple touch icon alias unless it is already configured
    pub fn with_apple_touch_icon(mut self) -> Self {
        if !self.aliases.iter().any(|a| a.file_name == APPLE_TOUCH_ICON) {
            self.aliases.push(AliasConfig::apple_touch_icon());
        }
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut all_sizes = self
            .container
            .sizes
            .iter()
            .chain(&self.standalone.sizes)
            .chain(self.aliases.iter().map(|a| &a.size));
        if let Some(&zero) = all_sizes.find(|s| !s.is_valid()) {
            return Err(ConfigError::ZeroSize(zero));
        }

        if let Some(&large) = self
            .container
            .sizes
            .iter()
            .find(|s| s.width > MAX_CONTAINER_SIDE || s.height > MAX_CONTAINER_SIDE)
        {
            return Err(ConfigError::FrameTooLarge(large));
        }

        let mut names = HashSet::new();
        check_file_name(&self.container.file_name)?;
        names.insert(self.container.file_name.clone());
        // Repeated standalone sizes just rewrite the same file
        names.extend(self.standalone.sizes.iter().map(|s| standalone_file_name(*s)));

        for alias in &self.aliases {
            check_file_name(&alias.file_name)?;
            if !names.insert(alias.file_name.clone()) {
                return Err(ConfigError::DuplicateOutput(alias.file_name.clone()));
            }
        }

        Ok(())
    }
}

/// Output names must be plain file names inside the output directory
fn check_file_name(name: &str) -> Result<(), ConfigError> {
    let plain = Path::new(name)
        .file_name()
        .is_some_and(|file| file == name);
    if name.is_empty() || !plain || name.contains(['/', '\\']) {
        return Err(ConfigError::InvalidFileName(name.to_string()));
    }
    Ok(())
}
