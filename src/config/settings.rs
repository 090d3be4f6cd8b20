//! Application settings and paths.

use crate::error::{ConfigError, ConfigResult};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Scope file used when nothing else names one.
pub const DEFAULT_SCOPE_FILE: &str = "scope.txt";
/// Exclusion file used when nothing else names one.
pub const DEFAULT_EXCLUDE_FILE: &str = "exclude.txt";

/// Application directory paths following the XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/scoper)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Locate the platform directories. Returns `None` when no home
    /// directory can be determined. Nothing is created.
    pub fn discover() -> Option<Self> {
        let project = ProjectDirs::from("com", "scoper", "scoper")?;
        Some(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// User settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Default scope file path.
    pub scope_file: Option<PathBuf>,
    /// Default exclusion file path.
    pub exclude_file: Option<PathBuf>,
    /// Enable verbose output by default.
    pub verbose: bool,
}

impl Settings {
    /// Load settings.
    ///
    /// An explicit path must exist and parse. Without one, the settings file
    /// in the config directory is used if present, otherwise defaults.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Paths::discover().map(|p| p.settings_file()) {
            Some(file) if file.is_file() => Self::load_from(&file),
            _ => Ok(Self::default()),
        }
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        debug!("loading settings from {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))
    }

    /// Scope file to use: `flag` (which already includes the environment
    /// variable), then the settings file, then [`DEFAULT_SCOPE_FILE`].
    pub fn scope_file(&self, flag: Option<&Path>) -> PathBuf {
        pick(flag, self.scope_file.as_deref(), DEFAULT_SCOPE_FILE)
    }

    /// Exclusion file to use, with the same precedence as [`Self::scope_file`].
    pub fn exclude_file(&self, flag: Option<&Path>) -> PathBuf {
        pick(flag, self.exclude_file.as_deref(), DEFAULT_EXCLUDE_FILE)
    }
}

fn pick(flag: Option<&Path>, configured: Option<&Path>, default: &str) -> PathBuf {
    flag.or(configured)
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(default))
}
