//! Resolve command implementation
//!
//! Implements `flist resolve <INPUT> [-o FILE] [-e] [-v]`.

use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::output::OutputConfig;
use crate::core::resolver::{resolve, Resolution};
use crate::core::settings::Settings;
use crate::error::FlistError;
use crate::infra::filesystem;

/// Arguments of the resolve command
#[derive(Debug, Clone)]
pub struct ResolveArgs {
    /// Input filelist
    pub input: PathBuf,
    /// Output file; stdout when absent
    pub out: Option<PathBuf>,
    /// `--expand` given
    pub expand: bool,
    /// `--verify` given
    pub verify: bool,
}

/// Execute the resolve command
pub fn execute(project_dir: &Path, args: &ResolveArgs, output: OutputConfig) -> Result<()> {
    if !args.input.exists() {
        return Err(FlistError::InputNotFound {
            path: args.input.clone(),
        }
        .into());
    }

    let settings = Settings::load(project_dir)?;
    let options = settings.resolve_options(args.expand, args.verify);
    tracing::debug!(
        "Resolving {} (expand: {}, verify: {})",
        args.input.display(),
        options.expand,
        options.verify
    );

    let resolution = resolve(&args.input, options)?;
    let rendered = render(&resolution, output.json)?;

    match &args.out {
        Some(path) => {
            filesystem::write_file(path, &rendered)?;
            tracing::info!("Wrote {} entries to {}", resolution.entries.len(), path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("Failed to write to stdout")?;
            stdout.flush()?;
        }
    }

    Ok(())
}

/// Render a resolution as filelist lines or JSON
fn render(resolution: &Resolution, json: bool) -> Result<String> {
    if json {
        let value = serde_json::json!({
            "entries": resolution.entries,
            "warnings": resolution.warnings,
        });
        let mut text = serde_json::to_string_pretty(&value)?;
        text.push('\n');
        Ok(text)
    } else {
        Ok(filesystem::join_lines(&resolution.entries))
    }
}
