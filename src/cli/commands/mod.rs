//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod prepare;
pub mod resolve;

use std::path::PathBuf;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::output::OutputConfig;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Flatten a filelist and print the result
    Resolve {
        /// Path to the input filelist
        input: PathBuf,

        /// Write the result to this file instead of stdout
        #[arg(short, long = "out", value_name = "FILE")]
        output: Option<PathBuf>,

        /// Expand environment variables in source and include paths
        #[arg(short, long)]
        expand: bool,

        /// Warn about source files and include directories that do not exist
        #[arg(short, long)]
        verify: bool,
    },

    /// Resolve a filelist and lay out a build directory for the tool scripts
    Prepare {
        /// Path to the input filelist
        input: PathBuf,

        /// Build directory (recreated from scratch)
        #[arg(short, long, value_name = "DIR", env = "FLIST_BUILD_DIR")]
        build_dir: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub fn run(self, output: OutputConfig) -> Result<()> {
        let current_dir = std::env::current_dir()?;
        match self {
            Self::Resolve {
                input,
                output: out,
                expand,
                verify,
            } => {
                let args = resolve::ResolveArgs {
                    input,
                    out,
                    expand,
                    verify,
                };
                resolve::execute(&current_dir, &args, output)
            }
            Self::Prepare { input, build_dir } => {
                prepare::execute(&current_dir, &input, build_dir, output)
            }
        }
    }
}
