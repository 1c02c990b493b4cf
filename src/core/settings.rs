//! Settings management
//!
//! Settings come from two optional TOML files, later layers winning:
//!
//! 1. global: `config.toml` in the flist config directory
//!    (`$FLIST_CONFIG_DIR`, or the platform config dir + `/flist`)
//! 2. project: `flist.toml` in the working directory
//!
//! Command-line flags are applied on top by the caller.
//!
//! ```toml
//! [resolve]
//! expand = true
//! verify = false
//!
//! [build]
//! dir = "out/build"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::defaults::{
    APP_NAME, DEFAULT_BUILD_DIR, ENV_CONFIG_DIR, GLOBAL_CONFIG_FILE, PROJECT_CONFIG_FILE,
};
use crate::core::resolver::ResolveOptions;
use crate::error::SettingsError;

/// All settings; every field is optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Resolution defaults
    #[serde(default)]
    pub resolve: ResolveSettings,

    /// Build directory defaults
    #[serde(default)]
    pub build: BuildSettings,
}

/// `[resolve]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolveSettings {
    /// Expand environment variables by default
    pub expand: Option<bool>,

    /// Verify paths by default
    pub verify: Option<bool>,
}

/// `[build]` table
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Build directory for `flist prepare`
    pub dir: Option<PathBuf>,
}

impl Settings {
    /// Load global then project settings for `project_dir`
    pub fn load(project_dir: &Path) -> Result<Self, SettingsError> {
        Self::load_layers(global_config_path().as_deref(), project_dir)
    }

    /// Load settings from an explicit global file and a project directory
    pub fn load_layers(global: Option<&Path>, project_dir: &Path) -> Result<Self, SettingsError> {
        let mut settings = match global {
            Some(path) => Self::load_from_path(path)?,
            None => Self::default(),
        };
        settings.merge(Self::load_from_path(&project_dir.join(PROJECT_CONFIG_FILE))?);
        Ok(settings)
    }

    /// Load one settings file; a missing file yields the defaults
    pub fn load_from_path(path: &Path) -> Result<Self, SettingsError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| SettingsError::Read {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let settings = toml::from_str(&content).map_err(|e| SettingsError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        tracing::debug!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Overlay `other` on top of `self`; values set in `other` win
    pub fn merge(&mut self, other: Self) {
        if other.resolve.expand.is_some() {
            self.resolve.expand = other.resolve.expand;
        }
        if other.resolve.verify.is_some() {
            self.resolve.verify = other.resolve.verify;
        }
        if other.build.dir.is_some() {
            self.build.dir = other.build.dir;
        }
    }

    /// Effective resolve options; a flag given on the command line turns the
    /// behaviour on regardless of settings
    #[must_use]
    pub fn resolve_options(&self, expand_flag: bool, verify_flag: bool) -> ResolveOptions {
        ResolveOptions::new(
            expand_flag || self.resolve.expand.unwrap_or(false),
            verify_flag || self.resolve.verify.unwrap_or(false),
        )
    }

    /// Effective build directory
    #[must_use]
    pub fn build_dir(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.build.dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BUILD_DIR))
    }
}

/// Path of the global settings file, if a config directory can be found
pub fn global_config_path() -> Option<PathBuf> {
    let dir = std::env::var_os(ENV_CONFIG_DIR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|d| d.join(APP_NAME)))?;
    Some(dir.join(GLOBAL_CONFIG_FILE))
}
