//! Build directory preparation
//!
//! Lays out a fresh build directory for a synthesis or simulation run:
//! the source list and the environment the tool scripts read. Running the
//! tool itself is left to the caller.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::defaults::{ENV_FILE, SOURCE_LIST_FILE};
use crate::core::partition::BuildInputs;
use crate::error::FilesystemError;
use crate::infra::filesystem;

/// Files written by [`prepare_build_dir`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PreparedBuild {
    /// The build directory
    pub build_dir: PathBuf,
    /// Source list, one file per line
    pub source_list: PathBuf,
    /// `KEY=value` environment assignments
    pub env_file: PathBuf,
    /// Number of source files listed
    pub source_count: usize,
}

/// Recreate `build_dir` and write the source list and environment file.
///
/// Anything already in `build_dir` is removed.
pub fn prepare_build_dir(
    build_dir: &Path,
    inputs: &BuildInputs,
) -> Result<PreparedBuild, FilesystemError> {
    tracing::debug!("Preparing build directory {}", build_dir.display());
    filesystem::reset_dir(build_dir)?;

    let source_list = build_dir.join(SOURCE_LIST_FILE);
    filesystem::write_file(&source_list, &inputs.source_list())?;

    let env_file = build_dir.join(ENV_FILE);
    filesystem::write_lines(
        &env_file,
        inputs
            .to_env_map()
            .iter()
            .map(|(key, value)| format!("{key}={value}")),
    )?;

    tracing::info!(
        "Wrote {} source files to {}",
        inputs.source_files.len(),
        source_list.display()
    );

    Ok(PreparedBuild {
        build_dir: build_dir.to_path_buf(),
        source_list,
        env_file,
        source_count: inputs.source_files.len(),
    })
}
