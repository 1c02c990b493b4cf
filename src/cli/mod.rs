//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no resolution logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;

use commands::Commands;
use output::OutputConfig;

/// flist - flatten nested HDL filelists
///
/// Inlines `-f` filelists, deduplicates and sorts source files, and keeps
/// `-d`, `-i` and `-L` directives in first-seen order.
#[derive(Parser, Debug)]
#[command(name = "flist")]
#[command(author, version, about, long_about = None, long_version = long_version())]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose logging (--verbose for info, twice for debug)
    #[arg(long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// `--version` text: package version plus the build metadata from `build.rs`
pub fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        format!(
            "{}\ncommit: {}\nbuilt: {}\ntarget: {}",
            env!("CARGO_PKG_VERSION"),
            option_env!("VERGEN_GIT_SHA").unwrap_or("unknown"),
            option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown"),
            option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown"),
        )
    })
}

impl Cli {
    /// Output preferences from the global flags
    pub fn output_config(&self) -> OutputConfig {
        OutputConfig::new(self.quiet, self.json, self.verbose)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let output = self.output_config();
        if let Some(cmd) = self.command {
            cmd.run(output)
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
