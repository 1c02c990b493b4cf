//! Error types for flist
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filelist resolution errors
///
/// Only conditions that abort a resolution call live here. Missing nested
/// filelists and missing verified paths are advisory and reported as
/// [`crate::core::resolver::Warning`] instead.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// Root filelist could not be opened or read
    #[error("Could not read filelist: {0}")]
    ManifestRead(FilesystemError),

    /// A filelist includes itself, directly or through other filelists
    #[error("Circular filelist include detected: {}", cycle.join(" -> "))]
    CircularInclude { cycle: Vec<String> },
}

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove directory
    #[error("Failed to remove directory '{path}': {error}")]
    RemoveDir { path: PathBuf, error: String },

    /// Failed to write file
    #[error("Failed to write file '{path}': {error}")]
    WriteFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },
}

/// Settings file errors
#[derive(Error, Debug)]
pub enum SettingsError {
    /// Failed to read settings file
    #[error("Failed to read config file '{path}': {error}")]
    Read { path: PathBuf, error: String },

    /// Failed to parse settings file
    #[error("Failed to parse config file '{path}': {error}")]
    Parse { path: PathBuf, error: String },
}

/// Top-level flist error type
#[derive(Error, Debug)]
pub enum FlistError {
    /// Input filelist does not exist
    #[error("File '{path}' not found")]
    InputNotFound { path: PathBuf },

    /// Build directory would swallow the project or its input filelist
    #[error("Build directory '{path}' contains '{protected}' and would be wiped")]
    UnsafeBuildDir { path: PathBuf, protected: PathBuf },

    /// Resolution error
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),

    /// Settings error
    #[error("Settings error: {0}")]
    Settings(#[from] SettingsError),
}
