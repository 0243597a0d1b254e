//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/astwalk/astwalk.toml`
//! 3. Local config: `<dir>/.astwalk.toml` (directory of the tree document)
//! 4. Environment variables: `ASTWALK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::TraversalOrder;

/// Unified configuration for astwalk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Traversal order used when none is given on the command line
    pub order: TraversalOrder,
    /// Indent walk output by node depth
    pub indent: bool,
    /// Spaces per depth level when indenting
    pub indent_width: usize,
    /// Separator between rendered walk entries
    pub separator: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            order: TraversalOrder::Pre,
            indent: false,
            indent_width: 2,
            separator: "\n".into(),
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified, inherit").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub order: Option<TraversalOrder>,
    pub indent: Option<bool>,
    pub indent_width: Option<usize>,
    pub separator: Option<String>,
}

/// Get the XDG config directory for astwalk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "astwalk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("astwalk.toml"))
}

/// Get the path to the local config file in a directory.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".astwalk.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e.message()),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            order: overlay.order.unwrap_or(self.order),
            indent: overlay.indent.unwrap_or(self.indent),
            indent_width: overlay.indent_width.unwrap_or(self.indent_width),
            separator: overlay
                .separator
                .clone()
                .unwrap_or_else(|| self.separator.clone()),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.astwalk.toml`
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path();
        Self::load_from(global.as_deref(), local_dir)
    }

    /// Same as [`Settings::load`] with an explicit global config path.
    #[instrument(level = "debug")]
    pub fn load_from(global_path: Option<&Path>, local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Global config
        if let Some(global_path) = global_path {
            if global_path.exists() {
                debug!("loading global config {}", global_path.display());
                current = current.merge_with(&load_raw_settings(global_path)?);
            }
        }

        // 3. Local config
        if let Some(dir) = local_dir {
            let local_path = local_config_path(dir);
            if local_path.exists() {
                debug!("loading local config {}", local_path.display());
                current = current.merge_with(&load_raw_settings(&local_path)?);
            }
        }

        // 4. Environment variables
        current = Self::apply_env_overrides(current)?;

        if current.separator.is_empty() {
            return Err(ApplicationError::Config {
                message: "separator must not be empty".into(),
            });
        }

        Ok(current)
    }

    /// Apply ASTWALK_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("ASTWALK").try_parsing(true))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("order") {
            settings.order = val.parse().map_err(|message| ApplicationError::Config { message })?;
        }
        match config.get_bool("indent") {
            Ok(val) => settings.indent = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        match config.get_int("indent_width") {
            Ok(val) => {
                settings.indent_width = usize::try_from(val).map_err(|_| ApplicationError::Config {
                    message: format!("indent_width must not be negative: {val}"),
                })?;
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }
        if let Ok(val) = config.get_string("separator") {
            settings.separator = unescape(&val);
        }

        Ok(settings)
    }

    /// Render settings as TOML (for `config show`).
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: e.to_string(),
        })
    }
}

/// Turns the two-character sequences `\n` and `\t` from a shell variable into
/// the characters they name.
fn unescape(value: &str) -> String {
    value.replace("\\n", "\n").replace("\\t", "\t")
}
