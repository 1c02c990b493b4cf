//! Prepare command implementation
//!
//! Implements `flist prepare <INPUT> [--build-dir DIR]`: resolves with
//! expansion and verification on, then writes the source list and tool
//! environment into a fresh build directory.

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::output::{status, OutputConfig};
use crate::core::partition::BuildInputs;
use crate::core::prepare::prepare_build_dir;
use crate::core::resolver::{resolve, ResolveOptions};
use crate::core::settings::Settings;
use crate::error::FlistError;

/// Execute the prepare command
pub fn execute(
    project_dir: &Path,
    input: &Path,
    build_dir: Option<PathBuf>,
    output: OutputConfig,
) -> Result<()> {
    if !input.exists() {
        return Err(FlistError::InputNotFound {
            path: input.to_path_buf(),
        }
        .into());
    }

    let settings = Settings::load(project_dir)?;
    let build_dir = project_dir.join(settings.build_dir(build_dir));
    check_build_dir(&build_dir, &[project_dir, input])?;

    let resolution = resolve(input, ResolveOptions::new(true, true))?;
    let inputs = BuildInputs::from_entries(&resolution.entries);
    if inputs.is_empty() {
        tracing::warn!("{} resolved to no entries", input.display());
    }
    let prepared = prepare_build_dir(&build_dir, &inputs)?;

    if output.json {
        let value = serde_json::json!({
            "build": prepared,
            "inputs": inputs,
            "warnings": resolution.warnings,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else if output.show_summary() {
        println!("Environment variables set:");
        for (key, value) in inputs.to_env_map() {
            println!("  {key}: {value}");
        }
        println!(
            "{} {} source files written to: {}",
            status::SUCCESS,
            prepared.source_count,
            prepared.source_list.display()
        );
        if !resolution.warnings.is_empty() {
            println!(
                "{} {} warnings, see above",
                status::WARNING,
                resolution.warnings.len()
            );
        }
    }

    Ok(())
}

/// Refuse a build directory that is, or contains, any of `protected`,
/// since preparing it removes everything inside
fn check_build_dir(build_dir: &Path, protected: &[&Path]) -> Result<(), FlistError> {
    // A directory that does not exist yet cannot contain anything
    let Ok(build_dir) = std::fs::canonicalize(build_dir) else {
        return Ok(());
    };
    for path in protected {
        let Ok(path) = std::fs::canonicalize(path) else {
            continue;
        };
        if path.starts_with(&build_dir) {
            return Err(FlistError::UnsafeBuildDir {
                path: build_dir,
                protected: path,
            });
        }
    }
    Ok(())
}
