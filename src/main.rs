//! flist CLI - recursive filelist resolver
//!
//! Entry point for the flist command-line application.

use anyhow::Result;
use clap::Parser;

use flist::cli::output::display_error;
use flist::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging level follows --quiet/--verbose; RUST_LOG refines it
    cli.output_config().init_tracing();
    tracing::debug!("flist {}", flist::cli::long_version().replace('\n', ", "));

    // Run the command and handle errors
    match cli.run() {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
